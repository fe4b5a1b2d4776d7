use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

/// Byte order of 16-bit samples in a P5 body.
///
/// Netpbm mandates big-endian; `LittleEndian` exists for producers that
/// wrote host-order samples on little-endian machines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    #[default]
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::BigEndian;
    /// Byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::LittleEndian;

    /// Whether samples in this order need swapping after a native-order read.
    pub fn needs_swap(self) -> bool {
        self != Self::NATIVE
    }

    /// Interpret two raw bytes as one sample in this byte order.
    #[inline]
    pub(crate) fn read_u16(self, pair: [u8; 2]) -> u16 {
        let native = u16::from_ne_bytes(pair);
        if self.needs_swap() {
            native.swap_bytes()
        } else {
            native
        }
    }
}

/// An 8-bit RGB image: width, height and interleaved `r, g, b` bytes.
///
/// This is the image description handed to the display layer, whether it
/// came from the 16-bit PGM path or from a generic loader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    pub width: u32,
    pub height: u32,
    pixels: Vec<u8>,
}

impl RgbImage {
    /// Wrap an RGB buffer. Returns `None` unless `pixels.len() == 3 * width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap a buffer produced by mapping exactly `width * height` samples.
    pub(crate) fn from_mapped(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Access the interleaved RGB bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// One row of RGB bytes.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let stride = self.width as usize * 3;
        let start = (y as usize).checked_mul(stride)?;
        self.pixels.get(start..start.checked_add(stride)?)
    }

    /// Reinterpret the pixel data as typed `RGB8` pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGB8] {
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of `RGB8` pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB8> {
        imgref::ImgRef::new(self.as_pixels(), self.width as usize, self.height as usize)
    }
}
