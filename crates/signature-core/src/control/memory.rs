//! In-memory signature pad.

use super::{BoxFuture, ControlError, ControlResult, SignaturePad, SurfaceImage};
use crate::data_url::{DataUrl, ImageFormat};

/// In-memory signature pad for testing and headless hosts.
///
/// Holds the last accepted image. Payloads are checked for valid base64 and
/// matching magic bytes but never rasterized.
#[derive(Debug, Clone, Default)]
pub struct MemoryPad {
    image: Option<DataUrl>,
    reset_count: usize,
}

impl MemoryPad {
    /// Create an empty pad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the pad has been cleared via [`SignaturePad::reset`].
    pub fn reset_count(&self) -> usize {
        self.reset_count
    }

    fn validate(image: &DataUrl) -> ControlResult<ImageFormat> {
        let declared = image
            .format()
            .ok_or_else(|| ControlError::UnsupportedFormat(image.mime().to_string()))?;
        let bytes = image.decode()?;

        match ImageFormat::from_magic_bytes(&bytes) {
            Some(detected) if detected == declared => Ok(declared),
            Some(detected) => Err(ControlError::UnsupportedFormat(format!(
                "declared {} but payload is {}",
                declared.mime_type(),
                detected.mime_type()
            ))),
            None => Err(ControlError::UnsupportedFormat(format!(
                "payload is not a {} image",
                declared.mime_type()
            ))),
        }
    }
}

impl SignaturePad for MemoryPad {
    fn reset(&mut self) {
        self.image = None;
        self.reset_count += 1;
    }

    fn image(&self) -> SurfaceImage {
        match &self.image {
            Some(url) => SurfaceImage::Encoded(url.clone()),
            None => SurfaceImage::Empty,
        }
    }

    fn load_image(&mut self, image: Option<DataUrl>) -> BoxFuture<'_, ControlResult<()>> {
        Box::pin(async move {
            if let Some(url) = &image {
                let format = Self::validate(url)?;
                log::debug!("Loaded {} signature image", format.mime_type());
            }
            self.image = image;
            Ok(())
        })
    }
}
