use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::Vector2;

/// A three-dimensional point or offset (position, velocity, rotation in
/// Euler degrees). Converted from `source/Base/Vector3.hpp`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const NIL: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    pub fn xz(&self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Lexicographic tuple compare (§4.B): not a magnitude comparison.
    pub fn cmp_tuple(&self, other: &Self) -> Ordering {
        (self.x, self.y, self.z)
            .partial_cmp(&(other.x, other.y, other.z))
            .unwrap_or(Ordering::Equal)
    }

    /// Rotates the X/Z components around the Y axis by `degrees`, about
    /// `center`: translate by `-center`, rotate, translate back (§4.B).
    pub fn rotate_xz_by(&mut self, degrees: f32, center: Vector3) {
        let (s, c) = degrees.to_radians().sin_cos();
        let x = self.x - center.x;
        let z = self.z - center.z;
        self.x = x * c - z * s + center.x;
        self.z = x * s + z * c + center.z;
    }

    /// Rotates X/Y around the Z axis by `degrees`, about `center`.
    pub fn rotate_xy_by(&mut self, degrees: f32, center: Vector3) {
        let (s, c) = degrees.to_radians().sin_cos();
        let x = self.x - center.x;
        let y = self.y - center.y;
        self.x = x * c - y * s + center.x;
        self.y = x * s + y * c + center.y;
    }

    /// Rotates Y/Z around the X axis by `degrees`, about `center`.
    pub fn rotate_yz_by(&mut self, degrees: f32, center: Vector3) {
        let (s, c) = degrees.to_radians().sin_cos();
        let y = self.y - center.y;
        let z = self.z - center.z;
        self.y = y * c - z * s + center.y;
        self.z = y * s + z * c + center.z;
    }

    pub fn to_string_delim(&self, delim: char) -> String {
        format!("{}{delim}{}{delim}{}", self.x, self.y, self.z)
    }

    /// Parses `"x<delim>y<delim>z"`. Missing trailing components default to
    /// `0.0`, matching the original's tolerant parser.
    pub fn from_string(delim: char, s: &str) -> Self {
        let mut parts = s.splitn(3, delim);
        let x = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0.0);
        let y = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0.0);
        let z = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0.0);
        Self { x, y, z }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn from_string_round_trips_under_strict_eq() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let s = v.to_string_delim(',');
        assert_eq!(Vector3::from_string(',', &s), v);
    }

    #[test]
    fn rotate_xz_by_90_about_origin() {
        let mut v = Vector3::new(1.0, 0.0, 0.0);
        v.rotate_xz_by(90.0, Vector3::NIL);
        assert!((v.x - 0.0).abs() < 1e-4);
        assert!((v.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn rotate_xz_by_about_nonorigin_center() {
        let mut v = Vector3::new(2.0, 0.0, 1.0);
        let center = Vector3::new(1.0, 0.0, 1.0);
        v.rotate_xz_by(180.0, center);
        assert!((v.x - 0.0).abs() < 1e-4);
        assert!((v.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn cmp_tuple_is_lexicographic() {
        let a = Vector3::new(1.0, 100.0, 100.0);
        let b = Vector3::new(2.0, 0.0, 0.0);
        assert_eq!(a.cmp_tuple(&b), Ordering::Less);
    }

    /// §8 "Round-trip / idempotence": `vec.from_string(",", vec.to_string(","))`
    /// equals the original under strict `==`, for every finite vector.
    #[quickcheck]
    fn from_string_round_trips_for_any_finite_vector(x: f32, y: f32, z: f32) -> TestResult {
        if !x.is_finite() || !y.is_finite() || !z.is_finite() {
            return TestResult::discard();
        }
        let v = Vector3::new(x, y, z);
        TestResult::from_bool(Vector3::from_string(',', &v.to_string_delim(',')) == v)
    }

    /// Rotating by 360 degrees about any center is a no-op (within float
    /// tolerance), for vectors and centers of reasonable magnitude.
    #[quickcheck]
    fn rotate_xz_by_360_is_identity(x: f32, z: f32, cx: f32, cz: f32) -> TestResult {
        if [x, z, cx, cz].iter().any(|v| !v.is_finite() || v.abs() > 1e4) {
            return TestResult::discard();
        }
        let mut v = Vector3::new(x, 0.0, z);
        v.rotate_xz_by(360.0, Vector3::new(cx, 0.0, cz));
        TestResult::from_bool((v.x - x).abs() < 1e-2 && (v.z - z).abs() < 1e-2)
    }
}
