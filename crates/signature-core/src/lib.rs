//! Signature Pad Core
//!
//! Default geometry and stroke settings, compositing modes, and the control
//! contract shared between a signature drawing surface and the UI that owns it.

pub mod config;
pub mod control;
pub mod data_url;
pub mod defaults;
pub mod draw_type;

pub use config::{ConfigError, ConfigResult, SignatureConfig, parse_hex_color};
pub use control::{
    BoxFuture, ControlError, ControlResult, MemoryPad, SignatureControl, SignaturePad,
    SurfaceImage, init_control,
};
pub use data_url::{DataUrl, DataUrlError, ImageFormat};
pub use defaults::{CanvasSize, DEFAULTS, LineWidth, PenDefaults, SignatureDefaults, defaults};
pub use draw_type::DrawType;
