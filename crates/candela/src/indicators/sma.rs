//! Simple Moving Average (SMA) indicator.
//!
//! The Simple Moving Average is a trend-following indicator that smooths price data
//! by creating a constantly updated average price. The SMA calculates the arithmetic
//! mean of a given set of values over a specified period.
//!
//! # Algorithm
//!
//! This implementation uses an O(n) rolling sum approach where:
//! 1. Initial sum is computed for the first `period` elements
//! 2. For each subsequent element, we add the new value and subtract the oldest value
//! 3. This maintains the rolling sum with O(1) operations per element
//!
//! # Formula
//!
//! ```text
//! SMA = (P1 + P2 + ... + Pn) / n
//! ```
//!
//! Where `P` is the price and `n` is the period.
//!
//! # Output Alignment
//!
//! The output is compact: it contains only the fully-formed window averages, so
//! its length is `data.len() - period + 1` (or zero when the data is shorter
//! than the period). `output[i]` is the mean of `data[i..i + period]`.
//!
//! # Example
//!
//! ```
//! use candela::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert_eq!(result.len(), 3);
//! assert!((result[0] - 2.0).abs() < 1e-10); // (1+2+3)/3 = 2.0
//! assert!((result[1] - 3.0).abs() < 1e-10); // (2+3+4)/3 = 3.0
//! assert!((result[2] - 4.0).abs() < 1e-10); // (3+4+5)/3 = 4.0
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_period, SeriesElement};

/// Returns the number of SMA values produced for a given input length and period.
///
/// This is `data_len - period + 1` when the input is long enough to hold at
/// least one full window, and zero otherwise.
///
/// # Example
///
/// ```
/// use candela::indicators::sma::sma_output_len;
///
/// assert_eq!(sma_output_len(10, 3), 8);
/// assert_eq!(sma_output_len(3, 3), 1);
/// assert_eq!(sma_output_len(2, 3), 0);
/// assert_eq!(sma_output_len(0, 3), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_output_len(data_len: usize, period: usize) -> usize {
    if period == 0 || data_len < period {
        0
    } else {
        data_len - period + 1
    }
}

/// Computes the Simple Moving Average (SMA) of a data series.
///
/// Returns a compact vector of window averages: `output[i]` is the arithmetic
/// mean of `data[i..i + period]`. Inputs shorter than the period (including
/// empty inputs) produce an empty vector rather than an error.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of periods to average over
///
/// # Returns
///
/// A `Result` containing a `Vec<T>` with the SMA values, or an error if validation fails.
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
/// If any input value in the current window is NaN, it propagates to the output.
///
/// # Example
///
/// ```
/// use candela::indicators::sma::sma;
///
/// let data = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
/// let result = sma(&data, 3).unwrap();
///
/// assert_eq!(result.len(), 3);
/// assert!((result[0] - 11.0).abs() < 1e-10);
/// ```
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;

    let out_len = sma_output_len(data.len(), period);
    let mut result = Vec::with_capacity(out_len);
    if out_len == 0 {
        return Ok(result);
    }

    // Convert period to T for division
    let period_t = T::from_usize(period)?;

    // Compute initial sum for the first window
    let mut sum = T::zero();
    for &value in &data[..period] {
        sum = sum + value;
    }
    result.push(sum / period_t);

    // Rolling sum for remaining elements: add new value, subtract oldest
    for i in period..data.len() {
        sum = sum + data[i] - data[i - period];
        result.push(sum / period_t);
    }

    Ok(result)
}

/// Computes the Simple Moving Average into a pre-allocated output buffer.
///
/// This variant allows reusing an existing buffer to avoid allocations in
/// performance-critical code paths. Values are written to `output[..count]`
/// where `count` is the returned number of window averages; the rest of the
/// buffer is left untouched.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of periods to average over
/// * `output` - Pre-allocated output buffer (must hold at least
///   [`sma_output_len`]`(data.len(), period)` elements)
///
/// # Returns
///
/// A `Result` containing the number of SMA values written, or an error if
/// validation fails.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The output buffer cannot hold every value (`Error::BufferSizeMismatch`)
///
/// # Example
///
/// ```
/// use candela::indicators::sma::sma_into;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let mut output = vec![0.0; 5];
/// let count = sma_into(&data, 3, &mut output).unwrap();
///
/// assert_eq!(count, 3);
/// assert!((output[0] - 2.0).abs() < 1e-10);
/// ```
pub fn sma_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    validate_period(period)?;

    let out_len = sma_output_len(data.len(), period);
    if output.len() < out_len {
        return Err(Error::BufferSizeMismatch {
            required: out_len,
            actual: output.len(),
        });
    }
    if out_len == 0 {
        return Ok(0);
    }

    // Convert period to T for division
    let period_t = T::from_usize(period)?;

    // Compute initial sum for the first window
    let mut sum = T::zero();
    for &value in &data[..period] {
        sum = sum + value;
    }
    output[0] = sum / period_t;

    // Rolling sum for remaining elements
    for i in period..data.len() {
        sum = sum + data[i] - data[i - period];
        output[i - period + 1] = sum / period_t;
    }

    Ok(out_len)
}
