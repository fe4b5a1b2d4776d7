use crate::error::PgmError;

/// Resource limits for decoding.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for any single buffer: the `u16` sample buffer while
    /// decoding, and the RGB buffer the viewer maps it into.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits before any sample is read.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PgmError> {
        let pixels = u64::from(width) * u64::from(height);
        within("width", u64::from(width), self.max_width)?;
        within("height", u64::from(height), self.max_height)?;
        within("pixel count", pixels, self.max_pixels)
    }

    /// Check that a buffer allocation is within the memory limit.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), PgmError> {
        within("allocation bytes", bytes as u64, self.max_memory_bytes)
    }
}

fn within(what: &str, value: u64, limit: Option<u64>) -> Result<(), PgmError> {
    match limit {
        Some(max) if value > max => Err(PgmError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
