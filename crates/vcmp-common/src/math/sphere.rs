use super::Vector3;

/// A bounding sphere, converted from `Base/Sphere.hpp`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f32,
}

impl Sphere {
    pub const fn new(center: Vector3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains_point(&self, p: Vector3) -> bool {
        self.center.distance(&p) <= self.radius
    }

    pub fn intersects(&self, other: &Sphere) -> bool {
        self.center.distance(&other.center) <= self.radius + other.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_respects_radius() {
        let s = Sphere::new(Vector3::new(0.0, 0.0, 0.0), 5.0);
        assert!(s.contains_point(Vector3::new(3.0, 4.0, 0.0)));
        assert!(!s.contains_point(Vector3::new(3.0, 4.1, 0.0)));
    }
}
