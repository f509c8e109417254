//! ARMA model fitting.
//!
//! Fits an autoregressive moving-average model of order `(p, q)` to a
//! series and returns its in-sample one-step-ahead fitted values. The
//! numerical work is delegated through the [`ArmaEstimator`] trait, with
//! [`HannanRissanen`] as the default implementation.
//!
//! # Model
//!
//! ```text
//! x[t] = mean + ar[0]*(x[t-1] - mean) + ... + ar[p-1]*(x[t-p] - mean)
//!             + ma[0]*e[t-1] + ... + ma[q-1]*e[t-q] + e[t]
//! ```
//!
//! # Output Alignment
//!
//! The fitted series has the same length as the input. Early entries lean
//! on pre-sample values treated as zero, so `fitted[0]` is always the
//! series mean.
//!
//! # Example
//!
//! ```
//! use candela::arma::arma_fit;
//!
//! let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
//! let fitted = arma_fit(&data, 1, 1).unwrap();
//!
//! assert_eq!(fitted.len(), data.len());
//! ```

pub mod hannan_rissanen;
pub mod lstsq;

pub use hannan_rissanen::HannanRissanen;

use crate::error::Result;
use crate::traits::{validate_order, SeriesElement};

/// A fitted ARMA model.
///
/// Returned by [`ArmaEstimator::fit`]. The high-level [`arma_fit`] entry
/// point keeps only `fitted_values`; estimators expose the rest for
/// callers that want the coefficients themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmaFit<T> {
    /// One-step-ahead in-sample predictions, same length as the input.
    pub fitted_values: Vec<T>,
    /// Autoregressive coefficients, ordered from lag 1 upward.
    pub ar: Vec<T>,
    /// Moving-average coefficients, ordered from lag 1 upward.
    pub ma: Vec<T>,
    /// Sample mean of the input series.
    pub mean: T,
    /// Innovation variance estimate.
    pub sigma2: T,
}

/// Strategy trait for ARMA parameter estimation.
///
/// Implementations take the raw series plus the AR and MA orders and
/// produce a complete [`ArmaFit`]. Orders are validated before an
/// estimator runs, so implementations may assume both are at least 1.
/// Any failure inside the estimator surfaces unchanged through
/// [`arma_fit`] and [`arma_fit_with`].
pub trait ArmaEstimator<T: SeriesElement> {
    /// Fits an ARMA(`ar_order`, `ma_order`) model to `series`.
    fn fit(&self, series: &[T], ar_order: usize, ma_order: usize) -> Result<ArmaFit<T>>;
}

/// Fits an ARMA model and returns its in-sample fitted values.
///
/// Uses the [`HannanRissanen`] estimator. The output has the same length
/// as the input.
///
/// # Errors
///
/// - [`Error::InvalidOrder`](crate::error::Error::InvalidOrder) if either
///   order is zero
/// - [`Error::EstimationFailed`](crate::error::Error::EstimationFailed) if
///   the estimator cannot produce a finite fit, for example when the
///   series is too short or contains non-finite values
///
/// # Example
///
/// ```
/// use candela::arma::arma_fit;
///
/// let data = vec![2.0, 2.5, 2.2, 2.8, 2.4, 3.0, 2.7, 3.2, 2.9, 3.4];
/// let fitted = arma_fit(&data, 1, 1).unwrap();
///
/// assert_eq!(fitted.len(), data.len());
/// assert!(fitted.iter().all(|x: &f64| x.is_finite()));
/// ```
pub fn arma_fit<T: SeriesElement>(
    data: &[T],
    ar_order: usize,
    ma_order: usize,
) -> Result<Vec<T>> {
    arma_fit_with(&HannanRissanen::new(), data, ar_order, ma_order)
}

/// Fits an ARMA model with a caller-supplied estimator.
///
/// Validates the orders, delegates to `estimator`, and returns the fitted
/// values. Estimator errors propagate unchanged.
pub fn arma_fit_with<T, E>(
    estimator: &E,
    data: &[T],
    ar_order: usize,
    ma_order: usize,
) -> Result<Vec<T>>
where
    T: SeriesElement,
    E: ArmaEstimator<T> + ?Sized,
{
    validate_order("ar", ar_order)?;
    validate_order("ma", ma_order)?;

    let fit = estimator.fit(data, ar_order, ma_order)?;
    debug_assert_eq!(fit.fitted_values.len(), data.len());
    Ok(fit.fitted_values)
}
