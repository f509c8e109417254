//! Hannan-Rissanen ARMA estimation.
//!
//! This module provides the default [`ArmaEstimator`] implementation: the
//! two-stage Hannan-Rissanen regression procedure. It is deterministic,
//! needs no numerical optimizer, and behaves well at the small orders used
//! for price series.
//!
//! # Algorithm
//!
//! 1. Demean the series
//! 2. Fit a long autoregression of order `max(p, q) + 1` by least squares
//!    and take its residuals as proxies for the unobserved innovations
//! 3. Regress the series on `p` value lags and `q` residual-proxy lags to
//!    obtain the AR and MA coefficients
//! 4. Run the forward innovation recursion to produce one-step-ahead
//!    in-sample fitted values and the innovation variance
//!
//! Pre-sample lags are treated as zero in both the proxy construction and
//! the forward recursion.
//!
//! # References
//!
//! - Hannan, E. J. and Rissanen, J. (1982), "Recursive estimation of mixed
//!   autoregressive-moving average order"

use crate::arma::lstsq::solve_least_squares;
use crate::arma::{ArmaEstimator, ArmaFit};
use crate::error::{Error, Result};
use crate::traits::{validate_order, SeriesElement};

/// Two-stage Hannan-Rissanen regression estimator for ARMA models.
///
/// This is the default estimator behind
/// [`arma_fit`](crate::arma::arma_fit). It can also be handed to
/// [`arma_fit_with`](crate::arma::arma_fit_with) explicitly, which is mostly
/// useful to contrast against custom [`ArmaEstimator`] implementations.
///
/// # Example
///
/// ```
/// use candela::arma::{ArmaEstimator, HannanRissanen};
///
/// let data: Vec<f64> = (1..=20).map(|x| x as f64).collect();
/// let fit = HannanRissanen::new().fit(&data, 1, 1).unwrap();
///
/// assert_eq!(fit.fitted_values.len(), data.len());
/// assert_eq!(fit.ar.len(), 1);
/// assert_eq!(fit.ma.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HannanRissanen;

impl HannanRissanen {
    /// Creates a new Hannan-Rissanen estimator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Minimum series length for the given orders.
    ///
    /// Both regression stages need more observations than coefficients;
    /// this bound keeps a margin of two on each.
    fn min_len(ar_order: usize, ma_order: usize) -> usize {
        let long_ar = Self::long_ar_order(ar_order, ma_order);
        (2 * long_ar + 2).max(long_ar + ar_order + ma_order + 1)
    }

    /// Order of the stage-1 long autoregression.
    fn long_ar_order(ar_order: usize, ma_order: usize) -> usize {
        ar_order.max(ma_order) + 1
    }
}

impl<T: SeriesElement> ArmaEstimator<T> for HannanRissanen {
    fn fit(&self, series: &[T], ar_order: usize, ma_order: usize) -> Result<ArmaFit<T>> {
        validate_order("ar", ar_order)?;
        validate_order("ma", ma_order)?;

        let n = series.len();
        let min_len = Self::min_len(ar_order, ma_order);
        if n < min_len {
            return Err(Error::EstimationFailed {
                reason: format!(
                    "series length {n} is below the minimum {min_len} for ar order \
                     {ar_order} and ma order {ma_order}"
                ),
            });
        }
        if series.iter().any(|x| !x.is_finite()) {
            return Err(Error::EstimationFailed {
                reason: "series contains non-finite values".to_string(),
            });
        }

        let n_t = T::from_usize(n)?;
        let mean = series.iter().fold(T::zero(), |acc, &x| acc + x) / n_t;
        let demeaned: Vec<T> = series.iter().map(|&x| x - mean).collect();

        // Stage 1: long autoregression whose residuals proxy the innovations
        let long_ar = Self::long_ar_order(ar_order, ma_order);
        let phi_long = fit_autoregression(&demeaned, long_ar)?;

        let mut proxies = vec![T::zero(); n];
        for t in long_ar..n {
            let mut pred = T::zero();
            for (lag, &phi) in phi_long.iter().enumerate() {
                pred = pred + phi * demeaned[t - 1 - lag];
            }
            proxies[t] = demeaned[t] - pred;
        }

        // Stage 2: regress on value lags and residual-proxy lags
        let start = ar_order.max(ma_order);
        let rows = n - start;
        let cols = ar_order + ma_order;
        let mut design = Vec::with_capacity(rows * cols);
        let mut target = Vec::with_capacity(rows);
        for t in start..n {
            for lag in 0..ar_order {
                design.push(demeaned[t - 1 - lag]);
            }
            for lag in 0..ma_order {
                design.push(proxies[t - 1 - lag]);
            }
            target.push(demeaned[t]);
        }

        let beta = solve_least_squares(&design, &target, rows, cols)?;
        let ar = beta[..ar_order].to_vec();
        let ma = beta[ar_order..].to_vec();

        // Forward innovation recursion for one-step-ahead fitted values,
        // with pre-sample values and innovations at zero
        let mut fitted_values = Vec::with_capacity(n);
        let mut innovations = vec![T::zero(); n];
        let mut sum_sq = T::zero();
        for t in 0..n {
            let mut pred = mean;
            for (lag, &coef) in ar.iter().enumerate() {
                if t > lag {
                    pred = pred + coef * demeaned[t - 1 - lag];
                }
            }
            for (lag, &coef) in ma.iter().enumerate() {
                if t > lag {
                    pred = pred + coef * innovations[t - 1 - lag];
                }
            }
            let innovation = series[t] - pred;
            innovations[t] = innovation;
            sum_sq = sum_sq + innovation * innovation;
            fitted_values.push(pred);
        }

        if fitted_values.iter().any(|x| !x.is_finite()) {
            return Err(Error::EstimationFailed {
                reason: "fitted values are non-finite".to_string(),
            });
        }
        let sigma2 = sum_sq / n_t;

        Ok(ArmaFit {
            fitted_values,
            ar,
            ma,
            mean,
            sigma2,
        })
    }
}

/// Fits an autoregression of the given order to a demeaned series.
///
/// Returns the lag coefficients, ordered from lag 1 upward.
fn fit_autoregression<T: SeriesElement>(demeaned: &[T], order: usize) -> Result<Vec<T>> {
    let n = demeaned.len();
    let rows = n - order;
    let mut design = Vec::with_capacity(rows * order);
    let mut target = Vec::with_capacity(rows);
    for t in order..n {
        for lag in 0..order {
            design.push(demeaned[t - 1 - lag]);
        }
        target.push(demeaned[t]);
    }

    solve_least_squares(&design, &target, rows, order)
}
