//! Display side of the viewer: the canvas an image is drawn onto and a
//! display that snapshots it to a binary PPM.

use std::io;
use std::path::PathBuf;

use crate::pixel::RgbImage;

/// Canvas fill color.
pub const BACKGROUND: [u8; 3] = [146, 146, 146];
/// Smallest canvas width.
pub const MIN_WIDTH: u32 = 512;
/// Smallest canvas height.
pub const MIN_HEIGHT: u32 = 256;

/// Something that can put an image in front of the user.
pub trait Display {
    /// Show `image`. `title` is the file name being displayed.
    fn show(&mut self, title: &str, image: &RgbImage) -> io::Result<()>;
}

/// The viewer surface: at least [`MIN_WIDTH`] x [`MIN_HEIGHT`], filled with
/// [`BACKGROUND`], with the image drawn at the top-left corner.
pub struct Canvas;

impl Canvas {
    pub fn compose(image: &RgbImage) -> RgbImage {
        let width = image.width.max(MIN_WIDTH);
        let height = image.height.max(MIN_HEIGHT);
        let stride = width as usize * 3;
        let mut pixels = BACKGROUND.repeat(width as usize * height as usize);

        for y in 0..image.height {
            if let Some(row) = image.row(y) {
                let start = y as usize * stride;
                pixels[start..start + row.len()].copy_from_slice(row);
            }
        }
        RgbImage::from_mapped(width, height, pixels)
    }
}

/// Encode an RGB image as a binary (P6) PPM.
pub fn encode_ppm(image: &RgbImage) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", image.width, image.height);
    let mut out = Vec::with_capacity(header.len() + image.pixels().len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(image.pixels());
    out
}

/// Writes every shown image to one PPM file, overwriting the previous one.
#[derive(Clone, Debug)]
pub struct PpmSnapshot {
    path: PathBuf,
    canvas: bool,
}

impl PpmSnapshot {
    /// `canvas` selects whether the image is composed onto a [`Canvas`] first.
    pub fn new(path: impl Into<PathBuf>, canvas: bool) -> Self {
        Self {
            path: path.into(),
            canvas,
        }
    }
}

impl Display for PpmSnapshot {
    fn show(&mut self, title: &str, image: &RgbImage) -> io::Result<()> {
        let encoded = if self.canvas {
            encode_ppm(&Canvas::compose(image))
        } else {
            encode_ppm(image)
        };
        std::fs::write(&self.path, encoded)?;
        log::debug!("{title} written to {}", self.path.display());
        Ok(())
    }
}
