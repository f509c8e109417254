//! Drawing surface abstraction.
//!
//! The renderer does not rasterize anything itself; it issues furniture
//! and segment calls against a [`Surface`]. The skia-backed
//! [`PngSurface`](crate::png::PngSurface) is the production
//! implementation; [`RecordingSurface`] captures the call stream so
//! renderer behavior can be asserted without touching a rasterizer.

use crate::error::Result;

/// An RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 = opaque.
    pub a: u8,
}

impl Color {
    /// Creates an opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from RGBA channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// One vertical segment in data space.
///
/// `x` is a day number on the horizontal axis; `y0` and `y1` are prices.
/// The endpoints keep the order the caller passed them in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Horizontal position (day number).
    pub x: f64,
    /// First endpoint price.
    pub y0: f64,
    /// Second endpoint price.
    pub y1: f64,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

/// A drawing surface a chart can be rendered onto.
///
/// Calls arrive in a fixed order from the renderer: furniture setters
/// first, then one `segment` call per drawn element, then a single
/// `display` to materialize the output. Implementations are free to draw
/// eagerly or to record and rasterize everything inside `display`.
pub trait Surface {
    /// Sets the chart title.
    fn set_title(&mut self, title: &str);

    /// Sets the horizontal and vertical axis labels.
    fn set_axis_labels(&mut self, x_label: &str, y_label: &str);

    /// Sets the strftime pattern used for date tick labels.
    ///
    /// The pattern is validated when the first tick label is formatted;
    /// a bad pattern fails `display`, not this setter.
    fn set_date_format(&mut self, pattern: &str);

    /// Draws a vertical segment at `x` from `y0` to `y1` in data space.
    fn segment(&mut self, x: f64, y0: f64, y1: f64, color: Color, width: f32);

    /// Materializes everything drawn so far.
    fn display(&mut self) -> Result<()>;
}

/// A [`Surface`] that records the calls it receives.
///
/// Used in tests to assert on the renderer's output without a
/// rasterizer. Records are kept in call order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Last title set, if any.
    pub title: Option<String>,
    /// Last axis label pair set, if any.
    pub axis_labels: Option<(String, String)>,
    /// Last date format set, if any.
    pub date_format: Option<String>,
    /// Every segment received, in call order.
    pub segments: Vec<Segment>,
    /// Number of `display` calls received.
    pub display_count: usize,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_axis_labels(&mut self, x_label: &str, y_label: &str) {
        self.axis_labels = Some((x_label.to_string(), y_label.to_string()));
    }

    fn set_date_format(&mut self, pattern: &str) {
        self.date_format = Some(pattern.to_string());
    }

    fn segment(&mut self, x: f64, y0: f64, y1: f64, color: Color, width: f32) {
        self.segments.push(Segment {
            x,
            y0,
            y1,
            color,
            width,
        });
    }

    fn display(&mut self) -> Result<()> {
        self.display_count += 1;
        Ok(())
    }
}
