//! Pack icons.
//!
//! Icons are decoded eagerly during the scan so a broken `pack_icon.png`
//! is noticed (and logged) once. A pack without a usable icon shares one
//! fallback image with every other such pack.

use image::{Rgba, RgbaImage};
use once_cell::sync::Lazy;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Edge length of the generated fallback icon.
pub const FALLBACK_ICON_SIZE: u32 = 32;

/// Shared fallback, a flat grey square.
static FALLBACK_ICON: Lazy<Arc<RgbaImage>> = Lazy::new(|| {
    Arc::new(RgbaImage::from_pixel(
        FALLBACK_ICON_SIZE,
        FALLBACK_ICON_SIZE,
        Rgba([0x6b, 0x6b, 0x6b, 0xff]),
    ))
});

/// Where an icon came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    /// Decoded from the pack's own icon file
    PackFile,
    /// The shared fallback image
    Fallback,
}

/// Opaque handle to a decoded pack icon.
#[derive(Clone)]
pub struct PackIcon {
    /// Decoded pixels, shared between clones
    image: Arc<RgbaImage>,
    /// Origin of the pixels
    source: IconSource,
}

impl PackIcon {
    /// The shared fallback icon.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            image: Arc::clone(&FALLBACK_ICON),
            source: IconSource::Fallback,
        }
    }

    /// Loads an icon, substituting the fallback on any failure.
    ///
    /// A missing file is expected and stays quiet; a file that exists but
    /// cannot be decoded is logged as a warning.
    #[must_use]
    pub fn load_or_fallback(path: &Path, pack_name: &str) -> Self {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no pack icon, using fallback");
            return Self::fallback();
        }

        match image::open(path) {
            Ok(decoded) => Self {
                image: Arc::new(decoded.to_rgba8()),
                source: IconSource::PackFile,
            },
            Err(e) => {
                tracing::warn!(
                    pack = pack_name,
                    path = %path.display(),
                    "Could not load pack icon, using fallback: {e}"
                );
                Self::fallback()
            }
        }
    }

    /// Decoded pixels.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Where the icon came from.
    #[must_use]
    pub const fn source(&self) -> IconSource {
        self.source
    }

    /// Whether this is the shared fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == IconSource::Fallback
    }

    /// `(width, height)` in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl fmt::Debug for PackIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        f.debug_struct("PackIcon")
            .field("source", &self.source)
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}
