//! Compositing mode used for signature strokes.

use peniko::{BlendMode, Compose, Mix};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a new stroke combines with pixels already on the canvas.
///
/// Serialized as the canvas `globalCompositeOperation` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawType {
    /// Draw over existing pixels.
    #[default]
    #[serde(rename = "source-over")]
    Pen,
    /// Erase existing pixels.
    #[serde(rename = "destination-out")]
    Eraser,
}

impl DrawType {
    /// Every draw type, in toolbar order.
    pub const ALL: [DrawType; 2] = [DrawType::Pen, DrawType::Eraser];

    /// Composite operation token for this draw type.
    pub const fn composite_operation(self) -> &'static str {
        match self {
            DrawType::Pen => "source-over",
            DrawType::Eraser => "destination-out",
        }
    }

    /// Look up a draw type by its composite operation token.
    pub fn from_composite_operation(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|draw_type| draw_type.composite_operation() == token)
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            DrawType::Pen => "Pen",
            DrawType::Eraser => "Eraser",
        }
    }

    /// Porter-Duff compose mode for peniko-based renderers.
    pub fn compose(self) -> Compose {
        match self {
            DrawType::Pen => Compose::SrcOver,
            DrawType::Eraser => Compose::DestOut,
        }
    }

    /// Blend mode to push when rendering a stroke of this type.
    pub fn blend_mode(self) -> BlendMode {
        BlendMode::new(Mix::Normal, self.compose())
    }

    /// The other draw type (pen <-> eraser).
    pub const fn toggled(self) -> Self {
        match self {
            DrawType::Pen => DrawType::Eraser,
            DrawType::Eraser => DrawType::Pen,
        }
    }
}

impl fmt::Display for DrawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.composite_operation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_two_draw_types() {
        assert_eq!(DrawType::ALL.len(), 2);
        assert_eq!(DrawType::ALL, [DrawType::Pen, DrawType::Eraser]);
    }

    #[test]
    fn test_composite_tokens() {
        assert_eq!(DrawType::Pen.composite_operation(), "source-over");
        assert_eq!(DrawType::Eraser.composite_operation(), "destination-out");
        assert_eq!(DrawType::Eraser.to_string(), "destination-out");
    }

    #[test]
    fn test_from_composite_operation() {
        assert_eq!(
            DrawType::from_composite_operation("source-over"),
            Some(DrawType::Pen)
        );
        assert_eq!(
            DrawType::from_composite_operation("destination-out"),
            Some(DrawType::Eraser)
        );
        assert_eq!(DrawType::from_composite_operation("multiply"), None);
    }

    #[test]
    fn test_serde_uses_tokens() {
        let json = serde_json::to_string(&DrawType::Eraser).unwrap();
        assert_eq!(json, "\"destination-out\"");
        let parsed: DrawType = serde_json::from_str("\"source-over\"").unwrap();
        assert_eq!(parsed, DrawType::Pen);
    }

    #[test]
    fn test_compose_mapping() {
        assert_eq!(DrawType::Pen.compose(), Compose::SrcOver);
        assert_eq!(DrawType::Eraser.compose(), Compose::DestOut);
        assert_eq!(DrawType::Eraser.blend_mode().compose, Compose::DestOut);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(DrawType::default(), DrawType::Pen);
        assert_eq!(DrawType::Pen.toggled(), DrawType::Eraser);
        assert_eq!(DrawType::Pen.toggled().toggled(), DrawType::Pen);
    }
}
