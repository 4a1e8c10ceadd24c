use super::{Sphere, Vector3};

/// An axis-aligned bounding box, converted from `Base/AABB.hpp`. `min`/`max`
/// are maintained componentwise by every `merge` call (§4.B).
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Aabb {
    pub min: Vector3,
    pub max: Vector3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Aabb {
    /// An inverted box (`min` at `+inf`, `max` at `-inf`) so the first
    /// `merge` call always wins, matching the original's `DEF_L`/`DEF_B`
    /// sentinels.
    pub const EMPTY: Self = Self {
        min: Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
        max: Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
    };

    pub const fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Expands this box to also cover `point`.
    pub fn merge_point(&mut self, point: Vector3) {
        self.min = Vector3::new(self.min.x.min(point.x), self.min.y.min(point.y), self.min.z.min(point.z));
        self.max = Vector3::new(self.max.x.max(point.x), self.max.y.max(point.y), self.max.z.max(point.z));
    }

    /// Expands this box to also cover `other`.
    pub fn merge_aabb(&mut self, other: &Aabb) {
        self.merge_point(other.min);
        self.merge_point(other.max);
    }

    /// Expands this box to also cover `sphere`'s extent.
    pub fn merge_sphere(&mut self, sphere: &Sphere) {
        let r = Vector3::splat(sphere.radius);
        self.merge_point(sphere.center - r);
        self.merge_point(sphere.center + r);
    }

    pub fn contains_point(&self, p: Vector3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y && p.z >= self.min.z && p.z <= self.max.z
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sphere_matches_seed_scenario() {
        // AABB(0,0,0,1,1,1).merge(Sphere((5,5,5),2)) -> min=(0,0,0), max=(7,7,7)
        let mut b = Aabb::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        b.merge_sphere(&Sphere::new(Vector3::new(5.0, 5.0, 5.0), 2.0));
        assert_eq!(b.min, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(b.max, Vector3::new(7.0, 7.0, 7.0));
    }

    #[test]
    fn merge_point_is_componentwise() {
        let mut b = Aabb::EMPTY;
        b.merge_point(Vector3::new(1.0, -2.0, 3.0));
        b.merge_point(Vector3::new(-1.0, 5.0, 0.0));
        assert_eq!(b.min, Vector3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, Vector3::new(1.0, 5.0, 3.0));
    }
}
