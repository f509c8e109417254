//! Error types for chart rendering.
//!
//! Rendering failures split into configuration problems caught while
//! laying out the chart (bad date patterns), backend failures (surface
//! allocation, PNG encoding), and I/O failures writing the output file.

use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The configured strftime date pattern cannot be formatted.
    ///
    /// Surfaced when the first tick label is produced, since chrono only
    /// reports bad patterns at format time.
    #[error("invalid date format pattern {pattern:?}")]
    InvalidDateFormat {
        /// The rejected pattern, verbatim.
        pattern: String,
    },

    /// The raster surface could not be allocated.
    #[error("failed to create {width}x{height} raster surface")]
    Surface {
        /// Requested width in pixels.
        width: i32,
        /// Requested height in pixels.
        height: i32,
    },

    /// The rendered image could not be encoded as PNG.
    #[error("PNG encoding failed")]
    PngEncode,

    /// Writing the output file failed.
    #[error("chart output I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for chart rendering operations.
pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_format_display() {
        let err = ChartError::InvalidDateFormat {
            pattern: "%Q".to_string(),
        };
        assert_eq!(err.to_string(), "invalid date format pattern \"%Q\"");
    }

    #[test]
    fn test_surface_display() {
        let err = ChartError::Surface {
            width: 1024,
            height: 640,
        };
        assert_eq!(err.to_string(), "failed to create 1024x640 raster surface");
    }

    #[test]
    fn test_png_encode_display() {
        assert_eq!(ChartError::PngEncode.to_string(), "PNG encoding failed");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ChartError = io_err.into();
        assert!(matches!(err, ChartError::Io(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<ChartError>();
    }
}
