use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A two-dimensional point or offset. Used by the area manager for polygon
/// vertices (§3 Area, §4.G).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[repr(C)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const NIL: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Lexicographic tuple compare: `x` first, `y` breaks ties. Not a
    /// magnitude/angle comparison (§4.B).
    pub fn cmp_tuple(&self, other: &Self) -> Ordering {
        (self.x, self.y)
            .partial_cmp(&(other.x, other.y))
            .unwrap_or(Ordering::Equal)
    }

    pub fn to_string_delim(&self, delim: char) -> String {
        format!("{}{delim}{}", self.x, self.y)
    }

    /// Parses `"x<delim>y"`, mirroring the C++ `Vector2::from_string` family.
    /// Missing components default to `0.0`, matching the original's
    /// tolerant parser.
    pub fn from_string(delim: char, s: &str) -> Self {
        let mut parts = s.splitn(2, delim);
        let x = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0.0);
        let y = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0.0);
        Self { x, y }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn from_string_round_trips() {
        let v = Vector2::new(1.5, -2.25);
        let s = v.to_string_delim(',');
        assert_eq!(Vector2::from_string(',', &s), v);
    }

    #[test]
    fn cmp_is_lexicographic_not_magnitude() {
        // (0, 10) has a larger magnitude than (1, 0) but a smaller x.
        let a = Vector2::new(0.0, 10.0);
        let b = Vector2::new(1.0, 0.0);
        assert_eq!(a.cmp_tuple(&b), Ordering::Less);
    }

    /// §8 "Round-trip / idempotence": `vec.from_string(",", vec.to_string(","))`
    /// equals the original under strict `==`, for every finite vector.
    #[quickcheck]
    fn from_string_round_trips_for_any_finite_vector(x: f32, y: f32) -> TestResult {
        if !x.is_finite() || !y.is_finite() {
            return TestResult::discard();
        }
        let v = Vector2::new(x, y);
        TestResult::from_bool(Vector2::from_string(',', &v.to_string_delim(',')) == v)
    }
}
