//! Data URLs carrying encoded signature images.
//!
//! Only the transport layer is handled here: the `data:` header and the
//! base64 payload. Pixel data is never decoded.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Image format of an encoded signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// WebP format.
    WebP,
}

/// MIME type and leading signature bytes for each supported format.
struct FormatSignature {
    format: ImageFormat,
    mime: &'static str,
    magic: &'static [u8],
    /// Byte offset of `magic` within the file.
    offset: usize,
}

static SIGNATURES: [FormatSignature; 3] = [
    FormatSignature {
        format: ImageFormat::Png,
        mime: "image/png",
        magic: b"\x89PNG",
        offset: 0,
    },
    FormatSignature {
        format: ImageFormat::Jpeg,
        mime: "image/jpeg",
        magic: b"\xFF\xD8\xFF",
        offset: 0,
    },
    // RIFF container; the form type sits after the chunk size.
    FormatSignature {
        format: ImageFormat::WebP,
        mime: "image/webp",
        magic: b"WEBP",
        offset: 8,
    },
];

impl ImageFormat {
    fn signature(self) -> &'static FormatSignature {
        match self {
            ImageFormat::Png => &SIGNATURES[0],
            ImageFormat::Jpeg => &SIGNATURES[1],
            ImageFormat::WebP => &SIGNATURES[2],
        }
    }

    /// MIME type, e.g. `image/png`.
    pub fn mime_type(&self) -> &'static str {
        self.signature().mime
    }

    /// Format for a MIME type. `image/jpg` is accepted as an alias.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.to_ascii_lowercase();
        let mime = match mime.as_str() {
            "image/jpg" => "image/jpeg",
            other => other,
        };
        SIGNATURES
            .iter()
            .find(|sig| sig.mime == mime)
            .map(|sig| sig.format)
    }

    /// Format sniffed from the leading bytes of an encoded image.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        SIGNATURES
            .iter()
            .find(|sig| data.get(sig.offset..sig.offset + sig.magic.len()) == Some(sig.magic))
            .map(|sig| sig.format)
    }
}

/// Data URL parse errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("Missing data: scheme")]
    MissingScheme,
    #[error("Missing comma before payload")]
    MissingPayload,
    #[error("Payload is not base64-encoded")]
    NotBase64,
    #[error("Not an image MIME type: {0}")]
    NotImage(String),
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A `data:image/...;base64,...` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataUrl {
    mime: String,
    payload: String,
}

impl DataUrl {
    /// Parse a data URL.
    ///
    /// Extra header parameters (`;charset=...`) are accepted and dropped.
    /// The payload is not decoded until [`DataUrl::decode`] is called.
    pub fn parse(input: &str) -> Result<Self, DataUrlError> {
        let input = input.trim();
        let rest = input
            .get(..5)
            .filter(|scheme| scheme.eq_ignore_ascii_case("data:"))
            .map(|_| &input[5..])
            .ok_or(DataUrlError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingPayload)?;

        // `base64` must be the last header parameter.
        let (meta, encoding) = header.rsplit_once(';').ok_or(DataUrlError::NotBase64)?;
        if !encoding.trim().eq_ignore_ascii_case("base64") {
            return Err(DataUrlError::NotBase64);
        }

        let mime = meta
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match mime.split_once('/') {
            Some(("image", subtype)) if !subtype.is_empty() => {}
            _ => return Err(DataUrlError::NotImage(mime)),
        }

        Ok(Self {
            mime,
            payload: payload.to_string(),
        })
    }

    /// Build a data URL from raw image bytes.
    pub fn from_bytes(format: ImageFormat, data: &[u8]) -> Self {
        Self {
            mime: format.mime_type().to_string(),
            payload: STANDARD.encode(data),
        }
    }

    /// MIME type, lowercased (e.g. `image/png`).
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Base64 payload as given.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Image format declared by the MIME type, if known.
    pub fn format(&self) -> Option<ImageFormat> {
        ImageFormat::from_mime(&self.mime)
    }

    /// Decode the base64 payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>, DataUrlError> {
        Ok(STANDARD.decode(self.payload.as_bytes())?)
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.payload)
    }
}

impl FromStr for DataUrl {
    type Err = DataUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DataUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DataUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
