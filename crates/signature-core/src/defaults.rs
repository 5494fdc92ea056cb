//! Built-in defaults for the signature pad.
//!
//! The record mirrors the shape the web widget expects, including the
//! `pen.lineWidth` grouping that repeats the top-level stroke widths.

use crate::config::{ConfigResult, parse_hex_color};
use crate::draw_type::DrawType;
use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1400;
/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 250;
/// Default stroke color.
pub const DEFAULT_DRAW_COLOR: &str = "#000000";
/// Default pen stroke width.
pub const DEFAULT_PEN_WIDTH: u32 = 2;
/// Default eraser stroke width.
pub const DEFAULT_ERASER_WIDTH: u32 = 24;

/// The signature pad defaults.
pub const DEFAULTS: SignatureDefaults = SignatureDefaults {
    size: CanvasSize::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
    draw_color: DEFAULT_DRAW_COLOR,
    draw_width_pen: DEFAULT_PEN_WIDTH,
    draw_width_eraser: DEFAULT_ERASER_WIDTH,
    pen: PenDefaults {
        line_width: LineWidth::new(DEFAULT_PEN_WIDTH, DEFAULT_ERASER_WIDTH),
    },
};

/// Shared reference to [`DEFAULTS`].
pub fn defaults() -> &'static SignatureDefaults {
    static RECORD: SignatureDefaults = DEFAULTS;
    &RECORD
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub w: u32,
    pub h: u32,
}

impl CanvasSize {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Size as kurbo geometry.
    pub fn to_size(&self) -> Size {
        Size::new(self.w as f64, self.h as f64)
    }

    /// Canvas rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.to_size())
    }

    /// Number of pixels on the canvas.
    pub fn pixel_count(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        DEFAULTS.size
    }
}

/// Stroke widths per draw type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineWidth {
    pub pen: u32,
    pub eraser: u32,
}

impl LineWidth {
    pub const fn new(pen: u32, eraser: u32) -> Self {
        Self { pen, eraser }
    }

    /// Width used for strokes of the given draw type.
    pub const fn for_draw_type(&self, draw_type: DrawType) -> u32 {
        match draw_type {
            DrawType::Pen => self.pen,
            DrawType::Eraser => self.eraser,
        }
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        DEFAULTS.pen.line_width
    }
}

/// Pen settings grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PenDefaults {
    pub line_width: LineWidth,
}

/// Frozen defaults record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDefaults {
    /// Canvas size.
    pub size: CanvasSize,
    /// Stroke color as `#rrggbb`.
    pub draw_color: &'static str,
    /// Pen stroke width.
    pub draw_width_pen: u32,
    /// Eraser stroke width.
    pub draw_width_eraser: u32,
    /// Same widths, grouped under `pen.lineWidth`.
    pub pen: PenDefaults,
}

impl SignatureDefaults {
    /// Top-level stroke width for the given draw type.
    pub const fn stroke_width(&self, draw_type: DrawType) -> u32 {
        match draw_type {
            DrawType::Pen => self.draw_width_pen,
            DrawType::Eraser => self.draw_width_eraser,
        }
    }

    /// Stroke color as a peniko color.
    pub fn draw_color(&self) -> ConfigResult<Color> {
        parse_hex_color(self.draw_color)
    }
}
