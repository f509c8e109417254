//! Skia-backed PNG surface.
//!
//! [`PngSurface`] rasterizes on a CPU surface and encodes PNG, either to
//! a file path or to in-memory bytes. Drawing is deferred: segment and
//! furniture calls are recorded, and the whole chart is laid out and
//! painted inside `display`, once the data bounds are known.
//!
//! # Layout
//!
//! The canvas splits into a plot rectangle (canvas minus [`Insets`]) and
//! the margin areas holding the title, axis labels, and date ticks. Data
//! coordinates map linearly onto the plot rectangle from the recorded
//! segment bounds, padded by half a day horizontally and 5% vertically.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::render::ChartStyle;
use crate::surface::{Color, Segment, Surface};

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

const BACKGROUND: Color = Color::rgb(18, 18, 20); // near-black
const GRID_COLOR: Color = Color::rgb(40, 40, 45);
const AXIS_COLOR: Color = Color::rgb(180, 180, 190);
const TEXT_COLOR: Color = Color::rgb(210, 210, 220);
const FONT_SIZE: f32 = 14.0;

/// Number of date tick labels along the bottom edge.
const DATE_TICKS: usize = 5;

/// Screen margins, in pixels.
///
/// Contract: all fields are non-negative and smaller than the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    /// Left margin, holds the y axis label.
    pub left: i32,
    /// Right margin.
    pub right: i32,
    /// Top margin, holds the title.
    pub top: i32,
    /// Bottom margin, holds date ticks and the x axis label.
    pub bottom: i32,
}

impl Insets {
    /// Creates new insets.
    #[must_use]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Total horizontal inset (left + right).
    #[must_use]
    pub const fn hsum(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    #[must_use]
    pub const fn vsum(&self) -> i32 {
        self.top + self.bottom
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Rendering options for [`PngSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Canvas width in pixels.
    pub width: i32,
    /// Canvas height in pixels.
    pub height: i32,
    /// Margins around the plot rectangle.
    pub insets: Insets,
    /// Background fill color.
    pub background: Color,
    /// Whether to draw the title, axis labels, and date ticks.
    ///
    /// Turning this off makes output byte-stable across platforms with
    /// different font stacks.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: BACKGROUND,
            draw_labels: true,
        }
    }
}

/// Padded data-space bounds of the recorded segments.
#[derive(Clone, Copy, Debug)]
struct DataBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl DataBounds {
    fn from_segments(segments: &[Segment]) -> Option<Self> {
        let first = segments.first()?;
        let mut bounds = Self {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y0.min(first.y1),
            y_max: first.y0.max(first.y1),
        };
        for seg in &segments[1..] {
            bounds.x_min = bounds.x_min.min(seg.x);
            bounds.x_max = bounds.x_max.max(seg.x);
            bounds.y_min = bounds.y_min.min(seg.y0.min(seg.y1));
            bounds.y_max = bounds.y_max.max(seg.y0.max(seg.y1));
        }

        // Half a day on each side keeps the outermost candles off the
        // plot border; 5% vertical headroom keeps wicks off the edges
        bounds.x_min -= 0.5;
        bounds.x_max += 0.5;
        let y_span = bounds.y_max - bounds.y_min;
        let pad = if y_span > 0.0 { y_span * 0.05 } else { 1.0 };
        bounds.y_min -= pad;
        bounds.y_max += pad;

        Some(bounds)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sx(&self, x: f64, left: i32, right: i32) -> f32 {
        let span = (self.x_max - self.x_min).max(1e-9);
        left as f32 + ((x - self.x_min) / span) as f32 * (right - left) as f32
    }

    #[allow(clippy::cast_possible_truncation)]
    fn sy(&self, y: f64, top: i32, bottom: i32) -> f32 {
        let span = (self.y_max - self.y_min).max(1e-9);
        bottom as f32 - ((y - self.y_min) / span) as f32 * (bottom - top) as f32
    }
}

/// A [`Surface`] that rasterizes through skia and encodes PNG.
///
/// # Example
///
/// ```no_run
/// use candela_chart::png::PngSurface;
/// use candela_chart::render::{render, ChartStyle, OhlcRow};
/// use chrono::NaiveDate;
///
/// let rows = vec![OhlcRow {
///     date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
///     open: 10.0,
///     high: 12.0,
///     low: 9.5,
///     close: 11.0,
/// }];
///
/// let mut surface = PngSurface::for_path("chart.png");
/// render(&mut surface, &rows, &ChartStyle::default()).unwrap();
/// ```
#[derive(Debug)]
pub struct PngSurface {
    options: RenderOptions,
    output_path: Option<PathBuf>,
    title: String,
    x_label: String,
    y_label: String,
    date_format: String,
    segments: Vec<Segment>,
    encoded: Option<Vec<u8>>,
}

impl PngSurface {
    /// Creates an in-memory surface; the PNG is available from
    /// [`png_bytes`](Self::png_bytes) after `display`.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        let style = ChartStyle::default();
        Self {
            options,
            output_path: None,
            title: style.title,
            x_label: style.x_label,
            y_label: style.y_label,
            date_format: style.date_format,
            segments: Vec::new(),
            encoded: None,
        }
    }

    /// Creates an in-memory surface with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(RenderOptions::default())
    }

    /// Creates a surface that writes its PNG to `path` on `display`.
    ///
    /// Parent directories are created as needed. The encoded bytes stay
    /// available from [`png_bytes`](Self::png_bytes) as well.
    #[must_use]
    pub fn for_path(path: impl AsRef<Path>) -> Self {
        let mut surface = Self::with_defaults();
        surface.output_path = Some(path.as_ref().to_path_buf());
        surface
    }

    /// The encoded PNG from the most recent `display`, if any.
    #[must_use]
    pub fn png_bytes(&self) -> Option<&[u8]> {
        self.encoded.as_deref()
    }

    /// Lays out and paints the chart, returning encoded PNG bytes.
    fn rasterize(&self) -> Result<Vec<u8>> {
        let opts = &self.options;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(
            ChartError::Surface {
                width: opts.width,
                height: opts.height,
            },
        )?;
        let canvas = surface.canvas();

        canvas.clear(to_skia(opts.background));

        let left = opts.insets.left;
        let right = opts.width - opts.insets.right;
        let top = opts.insets.top;
        let bottom = opts.height - opts.insets.bottom;

        draw_grid(canvas, left, top, right, bottom);
        draw_axes(canvas, left, top, right, bottom);

        let bounds = DataBounds::from_segments(&self.segments);

        if opts.draw_labels {
            draw_chart_labels(canvas, left, top, right, bottom, self);
            if let Some(bounds) = bounds {
                draw_date_ticks(canvas, left, right, bottom, bounds, &self.date_format)?;
            }
        }

        if let Some(bounds) = bounds {
            draw_segments(canvas, left, top, right, bottom, bounds, &self.segments);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Surface for PngSurface {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_axis_labels(&mut self, x_label: &str, y_label: &str) {
        self.x_label = x_label.to_string();
        self.y_label = y_label.to_string();
    }

    fn set_date_format(&mut self, pattern: &str) {
        self.date_format = pattern.to_string();
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
        let bytes = self.rasterize()?;
        if let Some(path) = &self.output_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &bytes)?;
        }
        self.encoded = Some(bytes);
        Ok(())
    }
}

// ---- painters ---------------------------------------------------------------

fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

fn text_font() -> (skia::Paint, skia::Font) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(TEXT_COLOR));
    let mut font = skia::Font::default();
    font.set_size(FONT_SIZE);
    (paint, font)
}

/// Rough center offset for default-font text at [`FONT_SIZE`].
#[allow(clippy::cast_precision_loss)]
fn half_text_width(text: &str) -> f32 {
    text.len() as f32 * 3.5
}

#[allow(clippy::cast_possible_truncation)]
fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(GRID_COLOR));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(f64::from(l), f64::from(r), 10) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(f64::from(t), f64::from(b), 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32) {
    let mut paint = skia::Paint::default();
    paint.set_color(to_skia(AXIS_COLOR));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &paint);
}

fn draw_chart_labels(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, surface: &PngSurface) {
    let (paint, font) = text_font();
    let center_x = (l + r) as f32 / 2.0;

    canvas.draw_str(
        &surface.title,
        (center_x - half_text_width(&surface.title), t as f32 - 8.0),
        &font,
        &paint,
    );
    canvas.draw_str(
        &surface.x_label,
        (center_x - half_text_width(&surface.x_label), b as f32 + 44.0),
        &font,
        &paint,
    );
    canvas.draw_str(
        &surface.y_label,
        (l as f32 - 56.0, t as f32 + 14.0),
        &font,
        &paint,
    );
}

#[allow(clippy::cast_possible_truncation)]
fn draw_date_ticks(
    canvas: &skia::Canvas,
    l: i32,
    r: i32,
    b: i32,
    bounds: DataBounds,
    pattern: &str,
) -> Result<()> {
    let (paint, font) = text_font();

    for x in linspace(bounds.x_min, bounds.x_max, DATE_TICKS) {
        let Some(date) = NaiveDate::from_num_days_from_ce_opt(x.round() as i32) else {
            continue;
        };
        let label = format_date(date, pattern)?;
        let px = bounds.sx(x, l, r);
        canvas.draw_str(&label, (px - half_text_width(&label), b as f32 + 24.0), &font, &paint);
    }

    Ok(())
}

fn draw_segments(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    bounds: DataBounds,
    segments: &[Segment],
) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);

    for seg in segments {
        paint.set_color(to_skia(seg.color));
        paint.set_stroke_width(seg.width);

        let x = bounds.sx(seg.x, l, r);
        let first = bounds.sy(seg.y0, t, b);
        let second = bounds.sy(seg.y1, t, b);
        let seg_top = first.min(second);
        // A flat segment (open == close) still gets one visible pixel
        let seg_bottom = first.max(second).max(seg_top + 1.0);

        canvas.draw_line((x, seg_top), (x, seg_bottom), &paint);
    }
}

/// Formats a date through the configured strftime pattern.
///
/// chrono reports unknown specifiers only when the formatter runs, so
/// this writes into a string and maps the failure.
fn format_date(date: NaiveDate, pattern: &str) -> Result<String> {
    let mut label = String::new();
    if write!(label, "{}", date.format(pattern)).is_err() {
        return Err(ChartError::InvalidDateFormat {
            pattern: pattern.to_string(),
        });
    }
    Ok(label)
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}
