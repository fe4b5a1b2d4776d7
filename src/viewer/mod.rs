//! File loading, navigation and display for the viewer (requires `std`).
//!
//! The decode and mapping functions stay pure; everything stateful lives
//! here: which file is selected and which image is currently shown.

mod display;
mod fallback;
mod navigator;

pub use display::{BACKGROUND, Canvas, Display, MIN_HEIGHT, MIN_WIDTH, PpmSnapshot, encode_ppm};
#[cfg(feature = "fallback")]
pub use fallback::ImageCrateLoader;
pub use fallback::{BoxError, FallbackLoader, NoFallback};
pub use navigator::{Command, Flow, Navigator, Shown};

use std::path::{Path, PathBuf};

use crate::decode::{DecodeOutcome, DecodeRequest};
use crate::error::PgmError;
use crate::gradient::Gradient;
use crate::limits::Limits;
use crate::pixel::{ByteOrder, RgbImage};
use enough::Unstoppable;

/// Settings the viewer passes to the decoder and mapper.
#[derive(Clone, Debug, Default)]
pub struct ViewOptions {
    pub gradient: Gradient,
    pub byte_order: ByteOrder,
    pub limits: Limits,
}

/// Failure to load one file. The viewer stays usable afterwards.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Pgm { path: PathBuf, source: PgmError },

    #[error("{}: {source}", .path.display())]
    Fallback { path: PathBuf, source: BoxError },
}

impl LoadError {
    /// The file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Pgm { path, .. }
            | LoadError::Fallback { path, .. } => path,
        }
    }
}

/// Decode in-memory file contents, deferring to `fallback` for anything
/// that is not a 16-bit PGM.
pub fn load_bytes(
    path: &Path,
    data: &[u8],
    options: &ViewOptions,
    fallback: &dyn FallbackLoader,
) -> Result<RgbImage, LoadError> {
    let outcome = DecodeRequest::new(data)
        .byte_order(options.byte_order)
        .with_limits(&options.limits)
        .decode(Unstoppable)
        .map_err(|source| LoadError::Pgm {
            path: path.to_path_buf(),
            source,
        })?;

    match outcome {
        DecodeOutcome::Image(img) => {
            let rgb_bytes = img.samples().len().saturating_mul(3);
            options
                .limits
                .check_memory(rgb_bytes)
                .map_err(|source| LoadError::Pgm {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(img.to_rgb(options.gradient))
        }
        DecodeOutcome::NotPgm(why) => {
            log::debug!("{}: {why:?}, using fallback loader", path.display());
            fallback.load(data).map_err(|source| LoadError::Fallback {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Read a file and decode it, see [`load_bytes`].
pub fn load_image(
    path: &Path,
    options: &ViewOptions,
    fallback: &dyn FallbackLoader,
) -> Result<RgbImage, LoadError> {
    let data = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_bytes(path, &data, options, fallback)
}
