//! Error types for candela.
//!
//! This module defines the error types used throughout the candela library
//! for handling various failure conditions.

use thiserror::Error;

/// The main error type for candela operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The period parameter is invalid.
    ///
    /// This error is returned when the period is zero or otherwise invalid
    /// for the requested operation. It is always raised before any
    /// computation begins.
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// A model order parameter is invalid.
    ///
    /// This error is returned when an autoregressive or moving-average
    /// order is zero. Like [`Error::InvalidPeriod`], it is raised before
    /// any computation begins.
    #[error("invalid {name} order {order}: order must be at least 1")]
    InvalidOrder {
        /// Name of the order parameter ("ar" or "ma").
        name: &'static str,
        /// The invalid order value that was provided.
        order: usize,
    },

    /// Model estimation failed.
    ///
    /// This error is returned when an [`ArmaEstimator`](crate::arma::ArmaEstimator)
    /// cannot produce a fit, for example because the series is too short or
    /// contains non-finite values. The estimator's own description of the
    /// failure is carried through unchanged.
    #[error("model estimation failed: {reason}")]
    EstimationFailed {
        /// The estimator's description of the failure.
        reason: String,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert values
    /// (e.g., converting a `usize` period to a generic `Float` type) and
    /// the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// An output buffer is too small for the computed result.
    ///
    /// This error is returned by the `_into` variants when the caller's
    /// buffer cannot hold every output element.
    #[error("output buffer too small: required {required} elements, got {actual}")]
    BufferSizeMismatch {
        /// The number of elements the buffer must hold.
        required: usize,
        /// The number of elements the buffer can hold.
        actual: usize,
    },
}

/// Convenience type alias for Results using the candela Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_period_error() {
        let err = Error::InvalidPeriod {
            period: 0,
            reason: "period must be at least 1",
        };
        assert_eq!(err.to_string(), "invalid period 0: period must be at least 1");
    }

    #[test]
    fn test_invalid_order_error() {
        let err = Error::InvalidOrder { name: "ar", order: 0 };
        assert_eq!(
            err.to_string(),
            "invalid ar order 0: order must be at least 1"
        );
    }

    #[test]
    fn test_estimation_failed_error() {
        let err = Error::EstimationFailed {
            reason: "series too short".to_string(),
        };
        assert_eq!(err.to_string(), "model estimation failed: series too short");
    }

    #[test]
    fn test_numeric_conversion_error() {
        let err = Error::NumericConversion {
            context: "converting period to float",
        };
        assert_eq!(
            err.to_string(),
            "numeric conversion failed: converting period to float"
        );
    }

    #[test]
    fn test_buffer_size_mismatch_error() {
        let err = Error::BufferSizeMismatch {
            required: 8,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "output buffer too small: required 8 elements, got 4"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::InvalidPeriod {
            period: 0,
            reason: "period must be at least 1",
        };
        let err2 = Error::InvalidPeriod {
            period: 0,
            reason: "period must be at least 1",
        };
        let err3 = Error::InvalidOrder { name: "ma", order: 0 };

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_error_clone() {
        let err = Error::EstimationFailed {
            reason: "singular design matrix".to_string(),
        };
        let err_clone = err.clone();
        assert_eq!(err, err_clone);
    }

    #[test]
    fn test_error_debug() {
        let err = Error::NumericConversion {
            context: "test context",
        };
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("NumericConversion"));
        assert!(debug_str.contains("test context"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_fn(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::InvalidPeriod {
                    period: 0,
                    reason: "period must be at least 1",
                })
            }
        }

        assert_eq!(test_fn(true).unwrap(), 42);
        assert!(test_fn(false).is_err());
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_std_error<E: std::error::Error>(_: E) {}
        let err = Error::InvalidOrder { name: "ar", order: 0 };
        accepts_std_error(err);
    }
}
