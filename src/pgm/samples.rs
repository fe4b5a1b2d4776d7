//! Sample body decoding for P2 (ASCII) and P5 (binary) rasters.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::PgmError;
use crate::pixel::ByteOrder;

/// Rows between cancellation checks.
const STOP_CHECK_ROWS: usize = 16;

/// Parse `width * height` whitespace-separated decimal samples.
///
/// Tokens after the last required sample are not inspected.
pub(crate) fn decode_ascii(
    body: &[u8],
    width: usize,
    pixel_count: usize,
    stop: &dyn Stop,
) -> Result<Vec<u16>, PgmError> {
    // Every sample takes at least one digit and one separator.
    let mut out = Vec::with_capacity(pixel_count.min(body.len() / 2 + 1));
    let check_every = width.saturating_mul(STOP_CHECK_ROWS).max(1);
    let tokens = body
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty())
        .take(pixel_count);

    for token in tokens {
        if out.len() % check_every == 0 {
            stop.check()?;
        }
        out.push(parse_sample(token, out.len())?);
    }

    if out.len() != pixel_count {
        return Err(PgmError::UnexpectedEof);
    }
    Ok(out)
}

fn parse_sample(token: &[u8], index: usize) -> Result<u16, PgmError> {
    let mut value: u16 = 0;
    for &b in token {
        if !b.is_ascii_digit() {
            return Err(PgmError::InvalidData(format!(
                "sample {index} is not a decimal number"
            )));
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u16::from(b - b'0')))
            .ok_or_else(|| PgmError::InvalidData(format!("sample {index} exceeds 65535")))?;
    }
    Ok(value)
}

/// Read `width * height` two-byte samples in `byte_order`.
///
/// Bytes past the last sample are ignored.
pub(crate) fn decode_binary(
    body: &[u8],
    width: usize,
    pixel_count: usize,
    byte_order: ByteOrder,
    stop: &dyn Stop,
) -> Result<Vec<u16>, PgmError> {
    let raster = pixel_count
        .checked_mul(2)
        .and_then(|len| body.get(..len))
        .ok_or(PgmError::UnexpectedEof)?;

    let mut out = Vec::with_capacity(pixel_count);
    for (row_idx, row) in raster.chunks_exact(width * 2).enumerate() {
        if row_idx % STOP_CHECK_ROWS == 0 {
            stop.check()?;
        }
        out.extend(
            row.chunks_exact(2)
                .map(|pair| byte_order.read_u16([pair[0], pair[1]])),
        );
    }
    Ok(out)
}
