//! Utility functions for candela.
//!
//! This module provides shared utility functions used throughout the library
//! and exposed for user convenience.
//!
//! # Floating-Point Comparison
//!
//! Due to the nature of floating-point arithmetic, exact equality comparison
//! is often inappropriate. This module provides tolerance-based comparison
//! functions for use in testing and validation.
//!
//! # Example
//!
//! ```
//! use candela::utils::{approx_eq, EPSILON};
//!
//! let a = 1.0 / 3.0;
//! let b = 0.333333333333333;
//! assert!(approx_eq(a, b, EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
///
/// This tolerance (1e-10) is appropriate for most indicator calculations
/// where accumulated floating-point error is minimal.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
///
/// Use this tolerance (1e-6) when comparing results that involve many
/// accumulated operations or when absolute precision is less critical.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN (for testing convenience).
///
/// # Arguments
///
/// * `a` - First value to compare
/// * `b` - Second value to compare
/// * `tolerance` - Maximum allowed absolute difference
///
/// # Returns
///
/// `true` if the values are approximately equal or both NaN.
///
/// # Example
///
/// ```
/// use candela::utils::{approx_eq, EPSILON};
///
/// // Normal comparison
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
///
/// // NaN handling (both NaN considered equal for testing)
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// Returns `true` if the relative difference between `a` and `b` is less than
/// `rel_tolerance`, or if both are NaN.
///
/// This is more appropriate than absolute tolerance when comparing values
/// of varying magnitudes.
///
/// # Arguments
///
/// * `a` - First value to compare
/// * `b` - Second value to compare
/// * `rel_tolerance` - Maximum allowed relative difference (e.g., 1e-10 for 0.00000001%)
///
/// # Returns
///
/// `true` if the values are relatively equal or both NaN.
///
/// # Example
///
/// ```
/// use candela::utils::approx_eq_relative;
///
/// // Large values with small relative difference
/// assert!(approx_eq_relative(1e10, 1e10 + 1.0, 1e-9));
///
/// // Small values with same relative difference
/// assert!(approx_eq_relative(1e-10, 1.000000001e-10, 1e-8));
/// ```
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}
