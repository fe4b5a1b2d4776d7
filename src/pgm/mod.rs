//! 16-bit PGM: P2 (ASCII) and P5 (binary).
//!
//! 8-bit PGMs (max value 255 or below) are recognized but reported as
//! [`NotPgm::EightBit`] so the caller can hand them to a generic loader.

mod header;
mod samples;

use core::num::NonZeroU16;

use crate::decode::{DecodeOutcome, DecodedImage, NotPgm};
use crate::error::PgmError;
use crate::limits::Limits;
use crate::pixel::ByteOrder;
use enough::Stop;

/// Which PGM sample encoding the file uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PgmVariant {
    /// `P2`: samples are ASCII decimal numbers.
    Ascii,
    /// `P5`: samples are raw binary, two bytes each when max value > 255.
    Binary,
}

impl PgmVariant {
    /// The magic token for this variant.
    pub fn magic(self) -> &'static str {
        match self {
            PgmVariant::Ascii => "P2",
            PgmVariant::Binary => "P5",
        }
    }
}

/// Parsed PGM header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PgmHeader {
    pub variant: PgmVariant,
    pub width: u32,
    pub height: u32,
    /// Declared maximum sample value; never zero.
    pub max_value: u16,
    /// Offset of the first raster byte.
    pub data_offset: usize,
}

impl PgmHeader {
    /// Parse just the header, without touching the sample body.
    ///
    /// Returns `Ok(None)` when the data does not start with a `P2` or `P5`
    /// magic token.
    pub fn parse(data: &[u8]) -> Result<Option<PgmHeader>, PgmError> {
        header::parse_header(data)
    }

    /// Whether samples need more than 8 bits.
    pub fn is_16bit(&self) -> bool {
        self.max_value > 255
    }
}

/// Decode a 16-bit PGM (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    byte_order: ByteOrder,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutcome, PgmError> {
    let Some(header) = header::parse_header(data)? else {
        log::debug!("no P2/P5 magic, deferring to another loader");
        return Ok(DecodeOutcome::NotPgm(NotPgm::UnrecognizedMagic));
    };
    log::debug!(
        "{} header: {}x{} max value {}",
        header.variant.magic(),
        header.width,
        header.height,
        header.max_value
    );

    if !header.is_16bit() {
        return Ok(DecodeOutcome::NotPgm(NotPgm::EightBit {
            max_value: header.max_value,
        }));
    }

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }

    let w = header.width as usize;
    let pixel_count = w
        .checked_mul(header.height as usize)
        .ok_or(PgmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    let out_bytes = pixel_count
        .checked_mul(core::mem::size_of::<u16>())
        .ok_or(PgmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if let Some(limits) = limits {
        limits.check_memory(out_bytes)?;
    }

    stop.check()?;

    let body = data
        .get(header.data_offset..)
        .ok_or(PgmError::UnexpectedEof)?;

    let samples = match header.variant {
        PgmVariant::Ascii => samples::decode_ascii(body, w, pixel_count, stop)?,
        PgmVariant::Binary => {
            samples::decode_binary(body, w, pixel_count, byte_order, stop)?
        }
    };

    // is_16bit() guarantees a non-zero max value.
    let max_value = NonZeroU16::new(header.max_value).ok_or(PgmError::InvalidHeaderValue {
        field: "max value",
    })?;

    Ok(DecodeOutcome::Image(DecodedImage::new(
        header.width,
        header.height,
        max_value,
        header.variant,
        samples,
    )))
}
