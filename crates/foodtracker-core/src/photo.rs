//! Encoded meal photos.

use std::{fmt, sync::Arc};

use image::ImageFormat;
use sha2::{Digest as _, Sha256};

/// Errors returned when bytes cannot be used as a [`Photo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PhotoError {
    /// No bytes were supplied.
    #[display("photo data is empty")]
    Empty,
    /// The bytes are not a supported image format.
    #[display("photo data is not a supported image format")]
    UnrecognizedFormat,
}

/// Image encodings accepted for meal photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum PhotoFormat {
    /// Portable Network Graphics.
    #[display("png")]
    Png,
    /// JPEG.
    #[display("jpg")]
    Jpeg,
    /// Graphics Interchange Format.
    #[display("gif")]
    Gif,
    /// WebP.
    #[display("webp")]
    WebP,
    /// Windows bitmap.
    #[display("bmp")]
    Bmp,
}

impl PhotoFormat {
    fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Gif => Some(Self::Gif),
            ImageFormat::WebP => Some(Self::WebP),
            ImageFormat::Bmp => Some(Self::Bmp),
            _ => None,
        }
    }
}

/// An encoded image attached to a meal.
///
/// The bytes are kept in their original encoding and shared, so cloning a
/// `Photo` (and therefore a [`Meal`](crate::Meal)) is cheap. Decoding into
/// pixels is left to the presentation layer.
#[derive(Clone, PartialEq, Eq)]
pub struct Photo {
    bytes: Arc<[u8]>,
    format: PhotoFormat,
}

impl Photo {
    /// Wraps encoded image bytes, recognizing the format from its magic bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PhotoError::Empty`] for an empty buffer and
    /// [`PhotoError::UnrecognizedFormat`] when the data is not PNG, JPEG, GIF,
    /// WebP or BMP.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Result<Self, PhotoError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(PhotoError::Empty);
        }
        let format = image::guess_format(&bytes)
            .ok()
            .and_then(PhotoFormat::from_image_format)
            .ok_or(PhotoError::UnrecognizedFormat)?;
        Ok(Self { bytes, format })
    }

    /// Returns the encoded bytes.
    #[must_use]
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    /// Returns the recognized format.
    #[must_use]
    pub fn format(&self) -> PhotoFormat {
        self.format
    }

    /// Returns the hex-encoded SHA-256 digest of the bytes.
    #[must_use]
    pub fn digest_hex(&self) -> String {
        format!("{:x}", Sha256::digest(&self.bytes))
    }

    /// Returns a content-addressed URI for image caches.
    ///
    /// Identical bytes always map to the same URI.
    #[must_use]
    pub fn uri(&self) -> String {
        format!("bytes://meal-photo/{}.{}", self.digest_hex(), self.format)
    }
}

impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}
