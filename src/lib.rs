//! # image-view
//!
//! Decoder for 16-bit PGM images plus the gradient mapping that turns
//! their samples into 8-bit RGB, and (with `std`) the file loading and
//! navigation pieces of a small image viewer built on top.
//!
//! ## Supported Formats
//!
//! - **P2** (PGM ASCII) with max value 256..=65535
//! - **P5** (PGM binary) with max value 256..=65535, big-endian samples by
//!   default or little-endian on request
//!
//! Anything else, including 8-bit PGMs, decodes to
//! [`DecodeOutcome::NotPgm`] so a generic loader can take over.
//!
//! ## Gradients
//!
//! - [`Gradient::Grayscale`]: `floor(255 * sample / max_value)` on every channel
//! - [`Gradient::Rainbow`]: blue → green → red, green at the midpoint
//!
//! ## Non-Goals
//!
//! - Writing PGM files
//! - Windowing and zooming (the viewer only hands RGB buffers to a display)
//!
//! ## Usage
//!
//! ```no_run
//! use image_view::{DecodeOutcome, Gradient, Unstoppable};
//!
//! let data: &[u8] = &[]; // your PGM bytes
//! match image_view::decode(data, Unstoppable)? {
//!     DecodeOutcome::Image(img) => {
//!         let rgb = img.to_rgb(Gradient::Rainbow);
//!         println!("{}x{}, {} bytes", rgb.width, rgb.height, rgb.pixels().len());
//!     }
//!     DecodeOutcome::NotPgm(why) => println!("not a 16-bit PGM: {why:?}"),
//! }
//! # Ok::<(), image_view::PgmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod gradient;
mod limits;
mod pixel;

pub mod pgm;

mod decode;

#[cfg(feature = "std")]
pub mod viewer;

// Re-exports
pub use decode::{DecodeOutcome, DecodeRequest, DecodedImage, NotPgm, decode};
pub use enough::{Stop, Unstoppable};
pub use error::PgmError;
pub use gradient::{Gradient, map_to_rgb};
pub use limits::Limits;
pub use pgm::{PgmHeader, PgmVariant};
pub use pixel::{ByteOrder, RgbImage};
