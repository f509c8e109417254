//! Candlestick chart renderer.
//!
//! Turns an OHLC table into surface draw calls: per row, a thin wick
//! segment spanning low to high and a thicker body segment spanning open
//! to close, colored by direction. The renderer owns the chart's shape;
//! everything visual beyond that (rasterization, layout, ticks) belongs
//! to the [`Surface`] implementation.
//!
//! # Output Alignment
//!
//! Rows are drawn at their date's day number on the horizontal axis, so
//! gaps in the calendar (weekends, halts) appear as gaps in the chart.
//!
//! # Example
//!
//! ```
//! use candela_chart::render::{render, ChartStyle, OhlcRow};
//! use candela_chart::surface::RecordingSurface;
//! use chrono::NaiveDate;
//!
//! let rows = vec![OhlcRow {
//!     date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!     open: 10.0,
//!     high: 12.0,
//!     low: 9.5,
//!     close: 11.0,
//! }];
//!
//! let mut surface = RecordingSurface::new();
//! render(&mut surface, &rows, &ChartStyle::default()).unwrap();
//!
//! assert_eq!(surface.segments.len(), 2); // wick + body
//! ```

use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::surface::{Color, Surface};

/// Color of candles that closed at or above their open.
pub const UP_COLOR: Color = Color::rgb(40, 200, 120);

/// Color of candles that closed below their open.
pub const DOWN_COLOR: Color = Color::rgb(220, 80, 80);

/// Stroke width of the low-to-high wick, in pixels.
pub const WICK_WIDTH: f32 = 1.0;

/// Stroke width of the open-to-close body, in pixels.
pub const BODY_WIDTH: f32 = 5.0;

/// One OHLC observation.
///
/// No ordering between the four prices is enforced; a row with
/// `low > high` simply draws an odd candle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OhlcRow {
    /// Trading date, positions the candle on the x axis.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Period high.
    pub high: f64,
    /// Period low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

/// Cosmetic chart configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartStyle {
    /// Chart title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// strftime pattern for date tick labels.
    pub date_format: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Candlestick Chart".to_string(),
            x_label: "Date".to_string(),
            y_label: "Price".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

/// Maps a calendar date onto the horizontal axis.
///
/// Day numbers count from the common era, so consecutive dates are one
/// unit apart and calendar gaps stay visible.
#[must_use]
pub fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Renders an OHLC table as a candlestick chart onto `surface`.
///
/// Sets the chart furniture from `style`, emits two segments per row
/// (wick then body, both in the row's direction color), and finishes
/// with a single `display` call. An empty table still produces the
/// furniture and the `display`.
///
/// # Errors
///
/// Propagates whatever the surface's `display` reports, for example
/// [`ChartError::InvalidDateFormat`](crate::error::ChartError::InvalidDateFormat)
/// from a backend that formats date ticks.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    rows: &[OhlcRow],
    style: &ChartStyle,
) -> Result<()> {
    surface.set_title(&style.title);
    surface.set_axis_labels(&style.x_label, &style.y_label);
    surface.set_date_format(&style.date_format);

    for row in rows {
        let x = day_number(row.date);
        let color = if row.close >= row.open {
            UP_COLOR
        } else {
            DOWN_COLOR
        };
        surface.segment(x, row.low, row.high, color, WICK_WIDTH);
        surface.segment(x, row.open, row.close, color, BODY_WIDTH);
    }

    surface.display()
}
