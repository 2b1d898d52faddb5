//! Angle helpers and float functions that work with or without `std`.
//!
//! Every transcendental function dispatches to the native implementation
//! when `std` is enabled and to `libm` otherwise.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// π
pub const PI: f64 = core::f64::consts::PI;

/// Degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps an angle in degrees into [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Wraps a fractional hour of day into [0, 24).
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    let wrapped = hours % 24.0;
    let wrapped = if wrapped < 0.0 { wrapped + 24.0 } else { wrapped };
    // a tiny negative input wraps to exactly 24.0
    if wrapped >= 24.0 { 0.0 } else { wrapped }
}

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …` with Horner's scheme.
pub fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    let Some((&highest, rest)) = coefficients.split_last() else {
        return 0.0;
    };
    rest.iter()
        .rev()
        .fold(highest, |acc, &coefficient| mul_add(acc, x, coefficient))
}

/// Sine of `x` radians.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Cosine of `x` radians.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Tangent of `x` radians.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Arcsine in radians.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Arccosine in radians. NaN outside [-1, 1].
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Arctangent in radians.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Four-quadrant arctangent of `y / x` in radians.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Square root.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Largest integer value not greater than `x`.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Natural logarithm.
#[inline]
pub fn ln(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ln();

    #[cfg(not(feature = "std"))]
    return libm::log(x);
}

/// Fused `x * a + b`.
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_angle_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(-45.0) + PI / 4.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(725.0), 5.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
    }

    #[test]
    fn test_normalize_hours_0_to_24() {
        assert_eq!(normalize_hours_0_to_24(0.0), 0.0);
        assert_eq!(normalize_hours_0_to_24(23.5), 23.5);
        assert_eq!(normalize_hours_0_to_24(24.0), 0.0);
        assert_eq!(normalize_hours_0_to_24(30.0), 6.0);
        assert_eq!(normalize_hours_0_to_24(-1.5), 22.5);
        assert_eq!(normalize_hours_0_to_24(-1e-17), 0.0);
    }

    #[test]
    fn test_polynomial() {
        assert_eq!(polynomial(&[], 5.0), 0.0);
        assert_eq!(polynomial(&[3.0], 5.0), 3.0);
        // 1 - 2x + 0.5x² at x = 4
        assert!((polynomial(&[1.0, -2.0, 0.5], 4.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_transcendental_dispatch() {
        assert!(sin(0.0).abs() < EPSILON);
        assert!((cos(0.0) - 1.0).abs() < EPSILON);
        assert!((atan2(1.0, 1.0) - PI / 4.0).abs() < EPSILON);
        assert!((ln(core::f64::consts::E) - 1.0).abs() < EPSILON);
        assert!(acos(1.5).is_nan());
    }
}
