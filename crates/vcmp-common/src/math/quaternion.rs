use std::cmp::Ordering;
use std::fmt;

use super::Vector3;

/// An orientation quaternion, `(x, y, z, w)`. Entities track rotation as a
/// `Vector3` of Euler angles in most of the API surface, but a handful of
/// host calls (vehicle/object rotation quaternions) need the full form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Builds a rotation of `degrees` about the Y axis, matching the
    /// rotation plane and sign convention of `Vector3::rotate_xz_by`
    /// (positive degrees rotate X toward -Z, not +Z).
    pub fn from_axis_angle_y(degrees: f32) -> Self {
        let half = degrees.to_radians() * 0.5;
        Self::new(0.0, -half.sin(), 0.0, half.cos())
    }

    pub fn cmp_tuple(&self, other: &Self) -> Ordering {
        (self.x, self.y, self.z, self.w)
            .partial_cmp(&(other.x, other.y, other.z, other.w))
            .unwrap_or(Ordering::Equal)
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            return Self::IDENTITY;
        }
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Hamilton product, `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }

    /// Rotates `v` by this quaternion.
    pub fn rotate(&self, v: Vector3) -> Vector3 {
        let qv = Quaternion::new(v.x, v.y, v.z, 0.0);
        let conj = Quaternion::new(-self.x, -self.y, -self.z, self.w);
        let r = self.mul(&qv).mul(&conj);
        Vector3::new(r.x, r.y, r.z)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rotate_is_noop() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Quaternion::IDENTITY.rotate(v).cmp_tuple(&v), std::cmp::Ordering::Equal);
    }

    #[test]
    fn axis_angle_y_matches_rotate_xz_by() {
        let mut v = Vector3::new(1.0, 0.0, 0.0);
        v.rotate_xz_by(90.0, Vector3::NIL);
        let q = Quaternion::from_axis_angle_y(90.0);
        let rotated = q.rotate(Vector3::new(1.0, 0.0, 0.0));
        assert!((rotated.x - v.x).abs() < 1e-4);
        assert!((rotated.z - v.z).abs() < 1e-4);
    }
}
