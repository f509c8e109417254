//! Commonly used types and traits for convenient importing.
//!
//! This prelude provides the most frequently used types, traits, and functions
//! from `candela` to simplify imports in typical usage scenarios.
//!
//! # Usage
//!
//! ```
//! use candela::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//! let fitted = arma_fit(&prices, 1, 1).unwrap();
//! ```
//!
//! # Contents
//!
//! This prelude re-exports:
//!
//! ## Error Handling
//! - [`Error`]: The main error type for computation failures
//! - [`Result`]: Type alias for `std::result::Result<T, Error>`
//!
//! ## Traits
//! - [`SeriesElement`]: Trait for numeric types usable in computations
//! - [`ArmaEstimator`]: Strategy trait for ARMA parameter estimation
//!
//! ## Indicator Functions
//! - `sma`, `ema`, `rsi` and their `_into` variants for pre-allocated
//!   buffers
//!
//! ## Model Fitting
//! - [`arma_fit`]: Fit with the default [`HannanRissanen`] estimator
//! - [`arma_fit_with`]: Fit with a caller-supplied estimator
//! - [`ArmaFit`]: Complete fit with coefficients and variance
//!
//! ## Output-Length Functions
//! - `sma_output_len`, `rsi_output_len`: Exact output length for a given
//!   input length and period

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::arma::ArmaEstimator;
pub use crate::traits::SeriesElement;

// Indicator functions (simple API)
pub use crate::indicators::{ema, rsi, sma};

// Indicator functions (_into API for pre-allocated buffers)
pub use crate::indicators::{ema_into, rsi_into, sma_into};

// Model fitting
pub use crate::arma::{arma_fit, arma_fit_with, ArmaFit, HannanRissanen};

// Output-length functions
pub use crate::indicators::{rsi_output_len, sma_output_len};
