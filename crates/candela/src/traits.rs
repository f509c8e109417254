//! Core traits for candela numeric operations.
//!
//! This module defines the traits used throughout the candela library
//! for generic numeric operations on data series.
//!
//! # Overview
//!
//! The primary trait is [`SeriesElement`], which provides a common interface
//! for numeric operations on time series data, abstracting over `f32` and `f64`
//! types. The module also provides standalone parameter validation functions.
//!
//! # Example
//!
//! ```
//! use candela::traits::{validate_period, SeriesElement};
//!
//! fn window_mean<T: SeriesElement>(data: &[T], period: usize) -> candela::error::Result<T> {
//!     validate_period(period)?;
//!
//!     let period_t = T::from_usize(period)?;
//!     let sum: T = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / period_t)
//! }
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = window_mean(&data, 3).unwrap();
//! assert!((result - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// This trait provides a common interface for numeric operations on series data,
/// abstracting over `f32` and `f64` types. It extends `num_traits::Float` with
/// additional methods specific to time series operations.
///
/// # Type Bounds
///
/// The trait requires:
/// - `Float`: Standard floating-point operations (NaN handling, infinity, arithmetic)
/// - `NumCast`: Safe conversion between numeric types
/// - `Copy`: Values can be copied (required for efficient iteration)
/// - `Default`: A default value exists (typically zero)
///
/// # Example
///
/// ```
/// use candela::traits::SeriesElement;
/// use num_traits::Float;
///
/// fn compute_sum<T: SeriesElement>(data: &[T]) -> T {
///     data.iter().fold(T::zero(), |acc, &x| {
///         if x.is_nan() { acc } else { acc + x }
///     })
/// }
///
/// let data = vec![1.0_f64, 2.0, f64::NAN, 4.0];
/// let sum = compute_sum(&data);
/// assert!((sum - 7.0).abs() < 1e-10);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// This is commonly used for converting period parameters to the series element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// This is commonly used in EMA calculations: `alpha = 2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        // Safe unwrap: 2 is always representable in Float types
        <Self as NumCast>::from(2).unwrap()
    }

    /// Returns the constant 100 as this type.
    ///
    /// This is commonly used for percentage calculations in indicators like RSI.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        // Safe unwrap: 100 is always representable in Float types
        <Self as NumCast>::from(100).unwrap()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is valid for indicator computation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that a model order is valid for estimation.
///
/// # Errors
///
/// Returns `Error::InvalidOrder` if the order is zero.
#[inline]
pub const fn validate_order(name: &'static str, order: usize) -> Result<()> {
    if order == 0 {
        Err(Error::InvalidOrder { name, order })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_element_from_usize() {
        let val: f64 = SeriesElement::from_usize(42).unwrap();
        assert!((val - 42.0).abs() < 1e-10);

        let val_f32: f32 = SeriesElement::from_usize(100).unwrap();
        assert!((val_f32 - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_from_f64() {
        let val: f64 = SeriesElement::from_f64(std::f64::consts::PI).unwrap();
        assert!((val - std::f64::consts::PI).abs() < 1e-10);

        // Test conversion from f64 to f32 (may lose precision)
        let val_f32: f32 = SeriesElement::from_f64(std::f64::consts::PI).unwrap();
        assert!((val_f32 - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_two() {
        let two_f64: f64 = SeriesElement::two();
        assert!((two_f64 - 2.0).abs() < 1e-10);

        let two_f32: f32 = SeriesElement::two();
        assert!((two_f32 - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_hundred() {
        let hundred_f64: f64 = SeriesElement::hundred();
        assert!((hundred_f64 - 100.0).abs() < 1e-10);

        let hundred_f32: f32 = SeriesElement::hundred();
        assert!((hundred_f32 - 100.0).abs() < 1e-5);
    }

    #[test]
    fn test_validate_period_success() {
        assert!(validate_period(1).is_ok());
        assert!(validate_period(100).is_ok());
    }

    #[test]
    fn test_validate_period_zero() {
        let result = validate_period(0);
        assert!(result.is_err());
        match result {
            Err(Error::InvalidPeriod { period, reason }) => {
                assert_eq!(period, 0);
                assert!(!reason.is_empty());
            }
            _ => panic!("Expected InvalidPeriod error"),
        }
    }

    #[test]
    fn test_validate_order_success() {
        assert!(validate_order("ar", 1).is_ok());
        assert!(validate_order("ma", 12).is_ok());
    }

    #[test]
    fn test_validate_order_zero() {
        let result = validate_order("ar", 0);
        assert!(result.is_err());
        match result {
            Err(Error::InvalidOrder { name, order }) => {
                assert_eq!(name, "ar");
                assert_eq!(order, 0);
            }
            _ => panic!("Expected InvalidOrder error"),
        }
    }

    #[test]
    fn test_series_element_nan_handling() {
        // Test that NaN values work correctly
        let nan: f64 = f64::NAN;
        assert!(nan.is_nan());

        let data: Vec<f64> = vec![1.0, f64::NAN, 3.0];
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_series_element_infinity_handling() {
        // Test that infinity values are representable
        let inf: f64 = f64::INFINITY;
        let neg_inf: f64 = f64::NEG_INFINITY;

        assert!(inf.is_infinite());
        assert!(neg_inf.is_infinite());
        assert!(inf.is_sign_positive());
        assert!(neg_inf.is_sign_negative());
    }

    #[test]
    fn test_series_element_default() {
        // Test that Default is implemented (returns zero)
        let default: f64 = f64::default();
        assert!((default - 0.0).abs() < 1e-10);

        let default_f32: f32 = f32::default();
        assert!((default_f32 - 0.0).abs() < 1e-5);
    }

    #[test]
    fn test_series_element_send_sync() {
        // Compile-time test that SeriesElement types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<f64>();
        assert_send_sync::<f32>();
    }

    #[test]
    fn test_series_element_large_usize_f64() {
        // Large usize values should convert to f64 without issue
        let large: usize = 1_000_000_000;
        let val: f64 = SeriesElement::from_usize(large).unwrap();
        assert!((val - 1e9).abs() < 1.0);
    }

    #[test]
    fn test_series_element_large_usize_f32() {
        // Large usize may lose precision in f32, but should still succeed
        let large: usize = 16_777_216; // 2^24, max exact integer in f32
        let val: f32 = SeriesElement::from_usize(large).unwrap();
        assert!((val - 16_777_216.0).abs() < 1.0);
    }

    #[test]
    fn test_constants_in_calculations() {
        // Verify constants work in typical indicator calculations
        // RSI percentage: gain / (gain + loss) * 100
        let gain: f64 = 0.25;
        let loss: f64 = 0.75;
        let hundred: f64 = SeriesElement::hundred();
        let rsi = (gain / (gain + loss)) * hundred;
        assert!((rsi - 25.0).abs() < 1e-10);

        // EMA alpha: 2 / (period + 1)
        let two: f64 = SeriesElement::two();
        let period: f64 = 13.0;
        let alpha = two / (period + 1.0);
        assert!((alpha - (2.0 / 14.0)).abs() < 1e-10);
    }
}
