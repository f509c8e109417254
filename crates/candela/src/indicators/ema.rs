//! Exponential Moving Average (EMA) indicator.
//!
//! The Exponential Moving Average is a trend-following indicator that gives more
//! weight to recent prices. Unlike the Simple Moving Average, the EMA responds
//! more quickly to recent price changes.
//!
//! # Algorithm
//!
//! This implementation computes EMA with O(n) time complexity using:
//! 1. The first output value is seeded with the first data value
//! 2. Subsequent values use the recursive formula below, strictly in input order
//!
//! # Formula
//!
//! ```text
//! α = 2 / (period + 1)
//! EMA[0] = Price[0]
//! EMA[i] = (Price[i] - EMA[i-1]) × α + EMA[i-1]
//! ```
//!
//! The output has the same length as the input: seeding from the first value
//! means every position has a defined average, so there is no lookback gap.
//!
//! # Example
//!
//! ```
//! use candela::indicators::ema::ema;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = ema(&data, 3).unwrap();
//!
//! assert_eq!(result.len(), 5);
//! assert!((result[0] - 1.0).abs() < 1e-10); // seed
//! assert!((result[1] - 1.5).abs() < 1e-10); // (2-1)*0.5 + 1
//! assert!((result[2] - 2.25).abs() < 1e-10); // (3-1.5)*0.5 + 1.5
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_period, SeriesElement};

/// Computes the Exponential Moving Average (EMA) of a data series.
///
/// Uses smoothing factor `α = 2 / (period + 1)` and seeds the recursion with
/// the first data value, so the output has the same length as the input. An
/// empty input produces an empty output.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of periods for the EMA calculation
///
/// # Returns
///
/// A `Result` containing a `Vec<T>` with the EMA values, or an error if validation fails.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The period cannot be represented in `T` (`Error::NumericConversion`)
///
/// # Performance
///
/// - Time complexity: O(n) where n is the length of the input data
/// - Space complexity: O(n) for the output vector
///
/// # NaN Handling
///
/// A NaN input value poisons the running average, so it propagates to every
/// subsequent output value.
///
/// # Example
///
/// ```
/// use candela::indicators::ema::ema;
///
/// let data = vec![10.0_f64, 11.0, 12.0, 13.0];
/// let result = ema(&data, 3).unwrap();
///
/// assert_eq!(result.len(), 4);
/// assert!((result[0] - 10.0).abs() < 1e-10);
/// ```
#[inline]
#[must_use = "this returns a Result with the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    let alpha = smoothing_factor::<T>(period)?;

    let mut result = Vec::with_capacity(data.len());
    if data.is_empty() {
        return Ok(result);
    }

    let mut prev = data[0];
    result.push(prev);

    // EMA[i] = (Price[i] - EMA[i-1]) * alpha + EMA[i-1], strictly sequential
    for &value in &data[1..] {
        prev = (value - prev) * alpha + prev;
        result.push(prev);
    }

    Ok(result)
}

/// Computes the Exponential Moving Average into a pre-allocated output buffer.
///
/// This variant allows reusing an existing buffer to avoid allocations in
/// performance-critical code paths.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of periods for the EMA calculation
/// * `output` - Pre-allocated output buffer (must be at least as long as input)
///
/// # Returns
///
/// A `Result` containing the number of EMA values written, which always equals
/// `data.len()`, or an error if validation fails.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The output buffer is shorter than the input (`Error::BufferSizeMismatch`)
///
/// # Example
///
/// ```
/// use candela::indicators::ema::ema_into;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![0.0_f64; 5];
/// let count = ema_into(&data, 3, &mut output).unwrap();
///
/// assert_eq!(count, 5);
/// assert!((output[0] - 1.0).abs() < 1e-10);
/// ```
#[inline]
#[must_use = "this returns a Result with the count of EMA values written"]
pub fn ema_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    let alpha = smoothing_factor::<T>(period)?;

    if output.len() < data.len() {
        return Err(Error::BufferSizeMismatch {
            required: data.len(),
            actual: output.len(),
        });
    }
    if data.is_empty() {
        return Ok(0);
    }

    let mut prev = data[0];
    output[0] = prev;

    for (i, &value) in data.iter().enumerate().skip(1) {
        prev = (value - prev) * alpha + prev;
        output[i] = prev;
    }

    Ok(data.len())
}

/// Computes the EMA smoothing factor: α = 2 / (period + 1)
fn smoothing_factor<T: SeriesElement>(period: usize) -> Result<T> {
    validate_period(period)?;

    let period_plus_one = T::from_usize(period + 1)?;
    Ok(T::two() / period_plus_one)
}
