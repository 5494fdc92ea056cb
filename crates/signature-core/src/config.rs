//! Runtime configuration layered over the built-in defaults.
//!
//! Hosts can ship a JSON file in the same camelCase shape as the defaults
//! record. Every field is optional; anything missing falls back to
//! [`DEFAULTS`](crate::defaults::DEFAULTS).

use crate::defaults::{CanvasSize, DEFAULTS, LineWidth, PenDefaults};
use crate::draw_type::DrawType;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid hex color: {0:?}")]
    InvalidColor(String),
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{draw_type:?} width {top} does not match pen.lineWidth value {nested}")]
    LineWidthMismatch {
        draw_type: DrawType,
        top: u32,
        nested: u32,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parse a `#rrggbb` or `#rgb` hex color.
pub fn parse_hex_color(color: &str) -> ConfigResult<Color> {
    let invalid = || ConfigError::InvalidColor(color.to_string());

    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    let (r, g, b) = match hex.len() {
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?),
        // #rgb expands each digit: #f80 -> #ff8800
        3 => (
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        ),
        _ => return Err(invalid()),
    };

    Ok(Color::from_rgba8(r, g, b, 255))
}

/// Validated signature pad configuration.
///
/// Fields are only reachable through getters, so a value built by
/// [`SignatureConfig::from_json`] stays valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureConfig {
    size: CanvasSize,
    draw_color: String,
    draw_width_pen: u32,
    draw_width_eraser: u32,
    pen: PenDefaults,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            size: DEFAULTS.size,
            draw_color: DEFAULTS.draw_color.to_string(),
            draw_width_pen: DEFAULTS.draw_width_pen,
            draw_width_eraser: DEFAULTS.draw_width_eraser,
            pen: DEFAULTS.pen,
        }
    }
}

/// On-disk shape before the nested widths are resolved.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    size: CanvasSize,
    draw_color: String,
    draw_width_pen: u32,
    draw_width_eraser: u32,
    pen: RawPen,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawPen {
    line_width: RawLineWidth,
}

/// Nested widths; anything missing mirrors the top-level width.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLineWidth {
    pen: Option<u32>,
    eraser: Option<u32>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            size: DEFAULTS.size,
            draw_color: DEFAULTS.draw_color.to_string(),
            draw_width_pen: DEFAULTS.draw_width_pen,
            draw_width_eraser: DEFAULTS.draw_width_eraser,
            pen: RawPen::default(),
        }
    }
}

impl SignatureConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Any `pen.lineWidth` entry that is omitted mirrors the top-level width.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let nested = raw.pen.line_width;
        let pen = PenDefaults {
            line_width: LineWidth::new(
                nested.pen.unwrap_or(raw.draw_width_pen),
                nested.eraser.unwrap_or(raw.draw_width_eraser),
            ),
        };

        let config = Self {
            size: raw.size,
            draw_color: raw.draw_color,
            draw_width_pen: raw.draw_width_pen,
            draw_width_eraser: raw.draw_width_eraser,
            pen,
        };
        config.validate()?;
        log::debug!(
            "Loaded signature config: {}x{}, color {}",
            config.size.w,
            config.size.h,
            config.draw_color
        );
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check dimensions, widths, and color.
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("size.w", self.size.w),
            ("size.h", self.size.h),
            ("drawWidthPen", self.draw_width_pen),
            ("drawWidthEraser", self.draw_width_eraser),
        ];
        if let Some((field, _)) = positive.into_iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::NonPositive { field });
        }

        for draw_type in DrawType::ALL {
            let top = self.stroke_width(draw_type);
            let nested = self.pen.line_width.for_draw_type(draw_type);
            if top != nested {
                return Err(ConfigError::LineWidthMismatch {
                    draw_type,
                    top,
                    nested,
                });
            }
        }

        parse_hex_color(&self.draw_color)?;
        Ok(())
    }

    /// Canvas size.
    pub fn size(&self) -> CanvasSize {
        self.size
    }

    /// Stroke color as given, e.g. `#000000`.
    pub fn draw_color_hex(&self) -> &str {
        &self.draw_color
    }

    /// Widths grouped under `pen.lineWidth`.
    pub fn line_width(&self) -> LineWidth {
        self.pen.line_width
    }

    /// Stroke width for the given draw type.
    pub fn stroke_width(&self, draw_type: DrawType) -> u32 {
        match draw_type {
            DrawType::Pen => self.draw_width_pen,
            DrawType::Eraser => self.draw_width_eraser,
        }
    }

    /// Stroke color as a peniko color.
    pub fn draw_color(&self) -> ConfigResult<Color> {
        parse_hex_color(&self.draw_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn rgb(color: Color) -> (u8, u8, u8) {
        let rgba = color.to_rgba8();
        (rgba.r, rgba.g, rgba.b)
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(rgb(parse_hex_color("#000000").unwrap()), (0, 0, 0));
        assert_eq!(rgb(parse_hex_color("#3B82F6").unwrap()), (59, 130, 246));
        assert_eq!(rgb(parse_hex_color("#f80").unwrap()), (255, 136, 0));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        for bad in ["000000", "#00000", "#gggggg", "", "#", "#+12345"] {
            assert!(
                matches!(parse_hex_color(bad), Err(ConfigError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_matches_builtin() {
        let config = SignatureConfig::default();
        assert_eq!(config.size, DEFAULTS.size);
        assert_eq!(config.draw_color, "#000000");
        assert_eq!(config.pen, DEFAULTS.pen);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = SignatureConfig::from_json("{}").unwrap();
        assert_eq!(config, SignatureConfig::default());
    }

    #[test]
    fn test_partial_override_mirrors_nested_widths() {
        let config = SignatureConfig::from_json(
            r##"{ "size": { "w": 800 }, "drawColor": "#1e3a8a", "drawWidthPen": 3 }"##,
        )
        .unwrap();
        assert_eq!(config.size, CanvasSize::new(800, 250));
        assert_eq!(config.stroke_width(DrawType::Pen), 3);
        assert_eq!(config.pen.line_width.pen, 3);
        assert_eq!(config.pen.line_width.eraser, 24);
    }

    #[test]
    fn test_empty_pen_group_mirrors_top_level() {
        let config = SignatureConfig::from_json(r#"{ "drawWidthPen": 3, "pen": {} }"#).unwrap();
        assert_eq!(config.line_width(), LineWidth::new(3, 24));
        assert_eq!(config.stroke_width(DrawType::Pen), 3);
    }

    #[test]
    fn test_partial_line_width_mirrors_missing_entry() {
        let config = SignatureConfig::from_json(
            r#"{ "drawWidthPen": 3, "drawWidthEraser": 30, "pen": { "lineWidth": { "eraser": 30 } } }"#,
        )
        .unwrap();
        assert_eq!(config.line_width(), LineWidth::new(3, 30));
    }

    #[test]
    fn test_getters() {
        let config = SignatureConfig::default();
        assert_eq!(config.size(), DEFAULTS.size);
        assert_eq!(config.draw_color_hex(), "#000000");
        assert_eq!(config.line_width(), DEFAULTS.pen.line_width);
    }

    #[test]
    fn test_nested_mismatch_rejected() {
        let result = SignatureConfig::from_json(
            r#"{ "drawWidthPen": 3, "pen": { "lineWidth": { "pen": 4, "eraser": 24 } } }"#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::LineWidthMismatch {
                draw_type: DrawType::Pen,
                top: 3,
                nested: 4
            })
        ));
    }

    #[test]
    fn test_zero_width_rejected() {
        let result = SignatureConfig::from_json(r#"{ "drawWidthEraser": 0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::NonPositive {
                field: "drawWidthEraser"
            })
        ));
    }

    #[test]
    fn test_negative_width_is_parse_error() {
        let result = SignatureConfig::from_json(r#"{ "drawWidthPen": -2 }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result = SignatureConfig::from_json(r#"{ "drawColor": "black" }"#);
        assert!(matches!(result, Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn test_json_round_trip_shape() {
        let json = SignatureConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["drawWidthPen"], 2);
        assert_eq!(value["pen"]["lineWidth"]["eraser"], 24);
        assert_eq!(SignatureConfig::from_json(&json).unwrap(), SignatureConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "size": {{ "w": 600, "h": 200 }} }}"#).unwrap();

        let config = SignatureConfig::load(file.path()).unwrap();
        assert_eq!(config.size, CanvasSize::new(600, 200));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SignatureConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
