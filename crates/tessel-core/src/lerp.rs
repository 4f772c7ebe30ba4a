//! Scalar interpolation primitives shared by every value type.

use crate::capability::{Cloneable, Equatable, Interpolatable};

/// Linear interpolation between two scalars.
///
/// `time` is not clamped: values outside `[0, 1]` extrapolate along the same
/// line. The result is exactly `from` at `time == 0.0` and exactly `to` at
/// `time == 1.0`.
#[inline]
pub fn lerp(from: f64, to: f64, time: f64) -> f64 {
    if time == 1.0 {
        return to;
    }
    from + (to - from) * time
}

/// Step interpolation for fields that cannot be blended (strings, names).
///
/// Holds `from` until `time` reaches 1.0, then switches to `to`.
#[inline]
pub fn step<'a, T: ?Sized>(from: &'a T, to: &'a T, time: f64) -> &'a T {
    if time >= 1.0 {
        to
    } else {
        from
    }
}

impl Equatable for f64 {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Cloneable for f64 {
    fn duplicate(&self) -> Self {
        *self
    }
}

impl Interpolatable for f64 {
    fn interpolate(&self, to: &Self, time: f64) -> Self {
        lerp(*self, *to, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let (a, b) = (0.1, 0.3);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        assert!((lerp(10.0, 20.0, 0.5) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < 1e-12);
        assert!((lerp(0.0, 10.0, -0.5) + 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_holds_until_end() {
        assert_eq!(step("a", "b", 0.0), "a");
        assert_eq!(step("a", "b", 0.99), "a");
        assert_eq!(step("a", "b", 1.0), "b");
        assert_eq!(step("a", "b", 2.0), "b");
    }

    #[test]
    fn test_f64_capabilities() {
        let x = 2.5_f64;
        assert!(x.equals(&x.duplicate()));
        assert!((x.interpolate(&4.5, 0.25) - 3.0).abs() < 1e-12);
    }
}
