//! Control contract between the UI and a signature drawing surface.
//!
//! The UI holds a [`SignatureControl`]. It starts out [`Uninitialized`] and
//! is replaced wholesale with an [`Active`] pad once the drawing surface
//! exists. Calls on an uninitialized control log an error and return inert
//! results instead of failing.
//!
//! [`Uninitialized`]: SignatureControl::Uninitialized
//! [`Active`]: SignatureControl::Active

mod memory;

pub use memory::MemoryPad;

use crate::data_url::{DataUrl, DataUrlError};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Control errors.
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("{0} called before the signature pad was initialized")]
    Uninitialized(&'static str),
    #[error("Invalid image data: {0}")]
    InvalidImage(#[from] DataUrlError),
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Signature pad error: {0}")]
    Other(String),
}

/// Result type for control operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Boxed future for async operations.
///
/// No `Send` bound: the control lives on the UI thread.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Current contents of a ready drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceImage {
    /// Nothing drawn.
    Empty,
    /// Encoded snapshot of the surface.
    Encoded(DataUrl),
}

impl SurfaceImage {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_data_url(&self) -> Option<&DataUrl> {
        match self {
            Self::Empty => None,
            Self::Encoded(url) => Some(url),
        }
    }

    pub fn into_data_url(self) -> Option<DataUrl> {
        match self {
            Self::Empty => None,
            Self::Encoded(url) => Some(url),
        }
    }
}

/// Operations a real signature drawing surface provides.
pub trait SignaturePad {
    /// Clear all strokes.
    fn reset(&mut self);

    /// Snapshot of the current surface.
    fn image(&self) -> SurfaceImage;

    /// Replace the surface contents. `None` clears it.
    fn load_image(&mut self, image: Option<DataUrl>) -> BoxFuture<'_, ControlResult<()>>;
}

/// The control handle held by the UI.
#[derive(Default)]
pub enum SignatureControl {
    /// No drawing surface yet.
    #[default]
    Uninitialized,
    /// Backed by a live drawing surface.
    Active(Box<dyn SignaturePad>),
}

/// Create the placeholder control used before a drawing surface exists.
pub fn init_control() -> SignatureControl {
    SignatureControl::Uninitialized
}

impl fmt::Debug for SignatureControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => f.write_str("Uninitialized"),
            Self::Active(_) => f.write_str("Active(..)"),
        }
    }
}

impl SignatureControl {
    /// Create a control backed by the given pad.
    pub fn new(pad: impl SignaturePad + 'static) -> Self {
        Self::Active(Box::new(pad))
    }

    /// Whether a drawing surface is attached.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Attach a drawing surface, returning the one it replaces.
    pub fn install(&mut self, pad: impl SignaturePad + 'static) -> Option<Box<dyn SignaturePad>> {
        log::debug!("Installing signature pad");
        match std::mem::replace(self, Self::new(pad)) {
            Self::Active(previous) => Some(previous),
            Self::Uninitialized => None,
        }
    }

    /// Detach the drawing surface, going back to the placeholder.
    pub fn uninstall(&mut self) -> Option<Box<dyn SignaturePad>> {
        match std::mem::take(self) {
            Self::Active(previous) => {
                log::debug!("Signature pad detached");
                Some(previous)
            }
            Self::Uninitialized => None,
        }
    }

    /// Clear the surface, or report that no surface exists.
    pub fn try_reset(&mut self) -> ControlResult<()> {
        match self {
            Self::Active(pad) => {
                pad.reset();
                Ok(())
            }
            Self::Uninitialized => Err(ControlError::Uninitialized("reset")),
        }
    }

    /// Snapshot the surface, or report that no surface exists.
    pub fn try_image(&self) -> ControlResult<SurfaceImage> {
        match self {
            Self::Active(pad) => Ok(pad.image()),
            Self::Uninitialized => Err(ControlError::Uninitialized("get_image")),
        }
    }

    /// Clear the surface. Logs an error if no surface is attached.
    pub fn reset(&mut self) {
        if let Err(e) = self.try_reset() {
            log::error!("{}", e);
        }
    }

    /// Snapshot the surface.
    ///
    /// `None` means no surface is attached; a cleared surface is
    /// `Some(SurfaceImage::Empty)`.
    pub fn get_image(&self) -> Option<SurfaceImage> {
        self.try_image().map_err(|e| log::error!("{}", e)).ok()
    }

    /// Replace the surface contents from a data URL. `None` clears it.
    ///
    /// Resolves to `true` only if the surface accepted the image.
    pub fn set_image(&mut self, data_url: Option<&str>) -> BoxFuture<'_, bool> {
        let pad = match self {
            Self::Active(pad) => pad,
            Self::Uninitialized => {
                log::error!("{}", ControlError::Uninitialized("set_image"));
                return Box::pin(async { false });
            }
        };

        let image = match data_url.map(DataUrl::parse).transpose() {
            Ok(image) => image,
            Err(e) => {
                log::warn!("Rejected signature image: {}", e);
                return Box::pin(async { false });
            }
        };

        let load = pad.load_image(image);
        Box::pin(async move {
            match load.await {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Failed to set signature image: {}", e);
                    false
                }
            }
        })
    }
}
