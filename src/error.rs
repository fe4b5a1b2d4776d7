use alloc::string::String;
use enough::StopReason;

/// Errors from 16-bit PGM decoding.
///
/// A file that is not a 16-bit PGM at all is not an error; see
/// [`crate::DecodeOutcome::NotPgm`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PgmError {
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid header value: {field} must be greater than zero")]
    InvalidHeaderValue { field: &'static str },

    #[error("unsupported max value {0} (must not exceed 65535)")]
    UnsupportedMaxValue(u32),

    #[error("invalid sample data: {0}")]
    InvalidData(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PgmError {
    fn from(r: StopReason) -> Self {
        PgmError::Cancelled(r)
    }
}
