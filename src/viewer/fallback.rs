//! Generic loaders for files the 16-bit PGM decoder defers on.

use crate::pixel::RgbImage;

/// Boxed error from a fallback loader.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Decodes any image format the PGM core does not handle into RGB8.
pub trait FallbackLoader {
    fn load(&self, data: &[u8]) -> Result<RgbImage, BoxError>;
}

/// Rejects everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFallback;

impl FallbackLoader for NoFallback {
    fn load(&self, _data: &[u8]) -> Result<RgbImage, BoxError> {
        Err("not a 16-bit PGM and no fallback loader is configured".into())
    }
}

/// Loader backed by the `image` crate: 8-bit PNM, PNG, JPEG, and the rest.
#[cfg(feature = "fallback")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateLoader;

#[cfg(feature = "fallback")]
impl FallbackLoader for ImageCrateLoader {
    fn load(&self, data: &[u8]) -> Result<RgbImage, BoxError> {
        let rgb = image::load_from_memory(data)?.to_rgb8();
        let (width, height) = rgb.dimensions();
        RgbImage::new(width, height, rgb.into_raw())
            .ok_or_else(|| "decoded RGB buffer does not match its dimensions".into())
    }
}
