//! Technical analysis indicators.
//!
//! This module provides implementations of common technical analysis indicators.
//! All indicators are:
//!
//! - Generic over `f32` and `f64` types via the [`SeriesElement`](crate::traits::SeriesElement) trait
//! - O(n) time complexity with efficient algorithms
//! - Compact in their output: no NaN padding, and inputs too short for a full
//!   window produce empty outputs rather than errors
//! - Validated up front, so invalid parameters fail before any computation
//!
//! # Indicators
//!
//! - [`sma`]: Simple Moving Average
//! - [`ema`]: Exponential Moving Average (seeded with the first data value)
//! - [`rsi`]: Relative Strength Index (momentum oscillator with SMA smoothing)

pub mod ema;
pub mod rsi;
pub mod sma;

// Re-export indicator functions for convenient access
pub use ema::{ema, ema_into};
pub use rsi::{rsi, rsi_into, rsi_output_len};
pub use sma::{sma, sma_into, sma_output_len};
