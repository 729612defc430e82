//! Precision constants for geometric comparisons.
//!
//! Every tolerance used by the extrema solvers is derived from these values
//! unless the caller overrides it through [`crate::extrema::ExtremaConfig`].

/// Angular tolerance for checking equality of angles (radians).
/// Used for parallelism checks on directions.
pub const ANGULAR: f64 = 1.0e-12;

/// Confusion tolerance for checking coincidence of two points in real space.
/// Two points are coincident if their distance < CONFUSION.
pub const CONFUSION: f64 = 1.0e-7;

/// Square of CONFUSION for performance.
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;

/// Default parametric confusion (assumes tangent length ~100).
pub const PARAMETRIC_CONFUSION: f64 = CONFUSION * 100.0;

/// Fundamental resolution for zero-length checks in normalization.
pub const RESOLUTION: f64 = f64::MIN_POSITIVE;

/// "Infinite" value for unbounded parameter ranges.
/// Not f64::INFINITY, to avoid NaN in arithmetic.
pub const INFINITE: f64 = 1.0e100;

/// Check if a value is considered infinite.
#[inline]
pub fn is_infinite(value: f64) -> bool {
    value.abs() >= INFINITE * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert_eq!(ANGULAR, 1.0e-12);
        assert_eq!(CONFUSION, 1.0e-7);
        assert_eq!(PARAMETRIC_CONFUSION, CONFUSION * 100.0);
        assert_eq!(SQUARE_CONFUSION, CONFUSION * CONFUSION);
    }

    #[test]
    fn test_infinite() {
        assert!(is_infinite(INFINITE));
        assert!(is_infinite(-INFINITE));
        assert!(!is_infinite(1.0e99));
        assert!(!is_infinite(f64::MAX.sqrt() * 1.0e-60));
    }
}
