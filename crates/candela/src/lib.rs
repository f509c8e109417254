//! candela: Technical analysis primitives for price series
//!
//! This crate provides compact, allocation-aware implementations of the
//! moving-average and momentum indicators used in financial analysis,
//! plus regression-based ARMA model fitting.
//!
//! # Features
//!
//! - **Performance**: O(n) rolling algorithms with `_into` variants for
//!   pre-allocated buffers
//! - **Compact output**: No NaN padding; every returned element is a
//!   fully formed value over a complete window
//! - **Generics**: Works with both `f32` and `f64` data types
//! - **Safety**: Explicit error handling for invalid periods and failed
//!   model estimation
//!
//! # Quick Start
//!
//! ```
//! use candela::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! // Output holds one mean per complete window
//! assert_eq!(result, vec![2.0, 3.0, 4.0]);
//! ```
//!
//! # Available Operations
//!
//! ## Moving Averages
//! - [`indicators::sma()`]: Simple Moving Average
//! - [`indicators::ema()`]: Exponential Moving Average
//!
//! ## Momentum
//! - [`indicators::rsi()`]: Relative Strength Index
//!
//! ## Model Fitting
//! - [`arma::arma_fit()`]: ARMA(p, q) in-sample fitted values via the
//!   Hannan-Rissanen regression estimator
//!
//! # Error Handling
//!
//! All entry points return [`Result<T, Error>`]. Windows longer than the
//! data are not an error; they produce an empty output:
//!
//! ```
//! use candela::prelude::*;
//!
//! // Zero period is rejected up front
//! let result = sma(&[1.0_f64, 2.0, 3.0], 0);
//! assert!(result.is_err());
//!
//! // Window longer than the data yields an empty output
//! let result = sma(&[1.0_f64, 2.0], 10).unwrap();
//! assert!(result.is_empty());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod arma;
pub mod error;
pub mod indicators;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use arma::arma_fit;
pub use error::{Error, Result};
pub use indicators::{ema, rsi, sma};
pub use traits::SeriesElement;
pub use utils::{approx_eq, approx_eq_relative, EPSILON, LOOSE_EPSILON};
