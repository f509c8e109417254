//! candela-chart: Candlestick chart rendering over pluggable surfaces
//!
//! This crate draws OHLC tables as candlestick charts. The renderer is a
//! pure call-stream producer over the [`surface::Surface`] trait; the
//! bundled [`png::PngSurface`] backend rasterizes that stream through
//! skia and encodes PNG to a file or to bytes.
//!
//! # Quick Start
//!
//! ```no_run
//! use candela_chart::{render, ChartStyle, OhlcRow, PngSurface};
//! use chrono::NaiveDate;
//!
//! let rows = vec![
//!     OhlcRow {
//!         date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!         open: 10.0,
//!         high: 12.0,
//!         low: 9.5,
//!         close: 11.0,
//!     },
//!     OhlcRow {
//!         date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//!         open: 11.0,
//!         high: 11.5,
//!         low: 9.0,
//!         close: 9.5,
//!     },
//! ];
//!
//! let mut surface = PngSurface::for_path("chart.png");
//! render(&mut surface, &rows, &ChartStyle::default()).unwrap();
//! ```
//!
//! # Testing Without a Rasterizer
//!
//! [`surface::RecordingSurface`] captures the renderer's call stream so
//! chart shape can be asserted in plain unit tests.

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

pub mod error;
pub mod png;
pub mod render;
pub mod surface;

// Re-export commonly used types at crate root
pub use error::{ChartError, Result};
pub use png::{Insets, PngSurface, RenderOptions};
pub use render::{render, ChartStyle, OhlcRow};
pub use surface::{Color, RecordingSurface, Segment, Surface};
