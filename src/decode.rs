use alloc::vec::Vec;
use core::num::NonZeroU16;

use enough::Stop;

use crate::error::PgmError;
use crate::gradient::{Gradient, map_to_rgb};
use crate::limits::Limits;
use crate::pgm::{self, PgmVariant};
use crate::pixel::{ByteOrder, RgbImage};

/// A decoded 16-bit PGM: dimensions, max value and raw samples.
///
/// `samples` always holds exactly `width * height` row-major values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Declared maximum sample value, the normalization divisor.
    pub max_value: NonZeroU16,
    /// Encoding the samples were read from.
    pub variant: PgmVariant,
    samples: Vec<u16>,
}

impl DecodedImage {
    pub(crate) fn new(
        width: u32,
        height: u32,
        max_value: NonZeroU16,
        variant: PgmVariant,
        samples: Vec<u16>,
    ) -> Self {
        debug_assert_eq!(samples.len(), width as usize * height as usize);
        Self {
            width,
            height,
            max_value,
            variant,
            samples,
        }
    }

    /// Raw grayscale samples, row-major.
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<u16> {
        self.samples
    }

    /// Map the samples through `gradient` into an 8-bit RGB image.
    pub fn to_rgb(&self, gradient: Gradient) -> RgbImage {
        let pixels = map_to_rgb(&self.samples, self.max_value, gradient);
        RgbImage::from_mapped(self.width, self.height, pixels)
    }
}

/// Why a file was not decoded as a 16-bit PGM.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotPgm {
    /// The data does not start with a `P2` or `P5` magic token.
    UnrecognizedMagic,
    /// A valid PGM header whose samples fit in 8 bits.
    EightBit { max_value: u16 },
}

/// Result of a successful decode attempt.
///
/// `NotPgm` is a signal to try another loader, not a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    Image(DecodedImage),
    NotPgm(NotPgm),
}

impl DecodeOutcome {
    /// The decoded image, if there is one.
    pub fn image(self) -> Option<DecodedImage> {
        match self {
            DecodeOutcome::Image(img) => Some(img),
            DecodeOutcome::NotPgm(_) => None,
        }
    }
}

/// Builder for 16-bit PGM decode operations.
///
/// ```no_run
/// use image_view::{DecodeRequest, ByteOrder, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your PGM bytes
/// let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
/// let outcome = DecodeRequest::new(data)
///     .byte_order(ByteOrder::LittleEndian)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// # Ok::<(), image_view::PgmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_order: ByteOrder::default(),
            limits: None,
        }
    }

    /// Byte order of P5 samples. Defaults to big-endian, as Netpbm specifies.
    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutcome, PgmError> {
        pgm::decode(self.data, self.byte_order, self.limits, &stop)
    }

    /// Decode and map to RGB in one step. `Ok(None)` means "not a 16-bit PGM".
    ///
    /// The memory limit applies to the RGB buffer as well as the samples.
    pub fn decode_rgb(
        self,
        gradient: Gradient,
        stop: impl Stop,
    ) -> Result<Option<RgbImage>, PgmError> {
        let limits = self.limits;
        let Some(img) = self.decode(stop)?.image() else {
            return Ok(None);
        };
        if let Some(limits) = limits {
            limits.check_memory(img.samples().len().saturating_mul(3))?;
        }
        Ok(Some(img.to_rgb(gradient)))
    }
}

/// Decode with default settings (big-endian P5 samples, no limits).
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutcome, PgmError> {
    DecodeRequest::new(data).decode(stop)
}
