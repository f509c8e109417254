//! Relative Strength Index (RSI) indicator.
//!
//! The Relative Strength Index is a momentum oscillator that measures the speed
//! and magnitude of price movements. It oscillates between 0 and 100, where
//! traditionally readings above 70 indicate overbought conditions and readings
//! below 30 indicate oversold conditions.
//!
//! # Algorithm
//!
//! This implementation computes RSI with O(n) time complexity:
//!
//! 1. Calculate price changes (current - previous)
//! 2. Separate changes into gains (positive) and losses (non-positive, stored
//!    as absolute values)
//! 3. Average gains and losses with the simple moving average over the period
//! 4. Calculate RS = Average Gain / Average Loss
//! 5. RSI = 100 - (100 / (1 + RS))
//!
//! # Formula
//!
//! ```text
//! Change[i] = Price[i] - Price[i-1]
//! Gain[i] = max(Change[i], 0)
//! Loss[i] = abs(min(Change[i], 0))
//!
//! Avg Gain = SMA(Gain, period)
//! Avg Loss = SMA(Loss, period)
//!
//! RS  = Avg Gain / Avg Loss   (RS = +inf when Avg Loss is 0)
//! RSI = 100 - (100 / (1 + RS))
//! ```
//!
//! # Output Alignment
//!
//! An input of n prices yields n - 1 changes, and averaging those with a
//! window of `period` yields n - period values. The output is compact with no
//! NaN prefix; inputs with fewer than period + 1 prices produce an empty
//! output.
//!
//! # Boundary Conditions
//!
//! - **All gains (no losses)**: RS = +inf, so RSI = 100 exactly
//! - **All losses (no gains)**: RS = 0, so RSI = 0
//! - **No movement in the window**: the loss average is 0, which is treated
//!   the same as the all-gain case, so RSI = 100
//!
//! # Example
//!
//! ```
//! use candela::indicators::rsi::rsi;
//!
//! let data = vec![44.0, 44.5, 45.0, 44.5, 44.0, 44.5, 45.0];
//! let result = rsi(&data, 3).unwrap();
//!
//! assert_eq!(result.len(), 4); // 7 prices, 6 changes, 4 windows
//! for value in &result {
//!     assert!(*value >= 0.0 && *value <= 100.0);
//! }
//! ```

use crate::error::{Error, Result};
use crate::indicators::sma::sma;
use crate::traits::{validate_period, SeriesElement};

/// Returns the number of RSI values produced for a given input length and period.
///
/// An input of `data_len` prices has `data_len - 1` consecutive changes, and
/// averaging those over `period` leaves `data_len - period` values. Inputs
/// without at least one full window produce zero values.
///
/// # Example
///
/// ```
/// use candela::indicators::rsi::rsi_output_len;
///
/// assert_eq!(rsi_output_len(10, 3), 7);
/// assert_eq!(rsi_output_len(4, 3), 1);
/// assert_eq!(rsi_output_len(3, 3), 0);
/// ```
#[inline]
#[must_use]
pub const fn rsi_output_len(data_len: usize, period: usize) -> usize {
    if period == 0 || data_len <= period {
        0
    } else {
        data_len - period
    }
}

/// Computes the Relative Strength Index (RSI) of a price series.
///
/// Gains and losses are taken from consecutive price changes and smoothed
/// with the simple moving average over `period`. The output is compact:
/// `data.len() - period` values, or empty when the input has no full window.
///
/// # Arguments
///
/// * `data` - The input price data series
/// * `period` - The number of change periods to average (commonly 14)
///
/// # Returns
///
/// A `Result` containing a `Vec<T>` with the RSI values, or an error if validation fails.
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
/// - Space complexity: O(n) for the change series and the output vector
///
/// # Example
///
/// ```
/// use candela::indicators::rsi::rsi;
///
/// let data = vec![40.0, 41.0, 42.0, 43.0, 44.0];
/// let result = rsi(&data, 3).unwrap();
///
/// // All changes are gains, so RSI saturates at 100
/// assert_eq!(result, vec![100.0, 100.0]);
/// ```
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;

    let (gains, losses) = gains_and_losses(data);
    let avg_gains = sma(&gains, period)?;
    let avg_losses = sma(&losses, period)?;

    let mut result = Vec::with_capacity(avg_gains.len());
    for (&gain, &loss) in avg_gains.iter().zip(avg_losses.iter()) {
        result.push(rsi_value(gain, loss));
    }

    Ok(result)
}

/// Computes the Relative Strength Index into a pre-allocated output buffer.
///
/// This variant allows reusing an existing buffer to avoid the output
/// allocation in performance-critical code paths.
///
/// # Arguments
///
/// * `data` - The input price data series
/// * `period` - The number of change periods to average
/// * `output` - Pre-allocated output buffer (must hold at least
///   [`rsi_output_len`]`(data.len(), period)` elements)
///
/// # Returns
///
/// A `Result` containing the number of RSI values written, or an error if
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
/// use candela::indicators::rsi::rsi_into;
///
/// let data = vec![40.0, 41.0, 42.0, 43.0, 44.0];
/// let mut output = vec![0.0; 2];
/// let count = rsi_into(&data, 3, &mut output).unwrap();
///
/// assert_eq!(count, 2);
/// assert_eq!(output, vec![100.0, 100.0]);
/// ```
pub fn rsi_into<T: SeriesElement>(data: &[T], period: usize, output: &mut [T]) -> Result<usize> {
    validate_period(period)?;

    let out_len = rsi_output_len(data.len(), period);
    if output.len() < out_len {
        return Err(Error::BufferSizeMismatch {
            required: out_len,
            actual: output.len(),
        });
    }
    if out_len == 0 {
        return Ok(0);
    }

    let (gains, losses) = gains_and_losses(data);
    let avg_gains = sma(&gains, period)?;
    let avg_losses = sma(&losses, period)?;

    for (out, (&gain, &loss)) in output
        .iter_mut()
        .zip(avg_gains.iter().zip(avg_losses.iter()))
    {
        *out = rsi_value(gain, loss);
    }

    Ok(out_len)
}

/// Splits consecutive price changes into gain and loss series.
///
/// Positive changes land in the gain series; zero and negative changes land
/// in the loss series as absolute values. Both outputs have length
/// `data.len() - 1` (or zero for inputs shorter than two elements).
fn gains_and_losses<T: SeriesElement>(data: &[T]) -> (Vec<T>, Vec<T>) {
    let change_count = data.len().saturating_sub(1);
    let mut gains = Vec::with_capacity(change_count);
    let mut losses = Vec::with_capacity(change_count);

    for pair in data.windows(2) {
        let change = pair[1] - pair[0];
        if change > T::zero() {
            gains.push(change);
            losses.push(T::zero());
        } else {
            gains.push(T::zero());
            losses.push(change.abs());
        }
    }

    (gains, losses)
}

/// Computes the RSI value from an average gain and an average loss.
///
/// A zero average loss makes RS positive infinity, which collapses the
/// `100 / (1 + RS)` term to zero and yields RSI = 100 exactly.
#[inline]
fn rsi_value<T: SeriesElement>(avg_gain: T, avg_loss: T) -> T {
    let rs = if avg_loss != T::zero() {
        avg_gain / avg_loss
    } else {
        T::infinity()
    };
    T::hundred() - T::hundred() / (T::one() + rs)
}
