//! PGM header tokenizer.
//!
//! Tokens are separated by ASCII whitespace; `#` starts a comment that runs
//! to the end of the line and may appear between any two tokens.

use alloc::format;

use super::{PgmHeader, PgmVariant};
use crate::error::PgmError;

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Skip a comment body and its line terminator.
    fn skip_comment(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'\n' || b == b'\r' {
                break;
            }
            self.pos += 1;
        }
        self.line_terminator();
    }

    /// Consume one `\n`, `\r` or `\r\n`, if present.
    fn line_terminator(&mut self) {
        match self.peek() {
            Some(b'\n') => self.pos += 1,
            Some(b'\r') => {
                self.pos += 1;
                if self.peek() == Some(b'\n') {
                    self.pos += 1;
                }
            }
            _ => {}
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'#' {
                self.skip_comment();
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Whether the cursor sits on a token boundary (whitespace, comment or end).
    fn at_boundary(&self) -> bool {
        match self.peek() {
            None => true,
            Some(b) => b == b'#' || b.is_ascii_whitespace(),
        }
    }

    fn magic(&mut self) -> Option<PgmVariant> {
        self.skip_whitespace_and_comments();
        let variant = match self.data.get(self.pos..self.pos + 2)? {
            b"P2" => PgmVariant::Ascii,
            b"P5" => PgmVariant::Binary,
            _ => return None,
        };
        self.pos += 2;
        self.at_boundary().then_some(variant)
    }

    fn number(&mut self, field: &'static str) -> Result<u32, PgmError> {
        self.skip_whitespace_and_comments();
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or_else(|| PgmError::InvalidHeader(format!("{field} overflows u32")))?;
            self.pos += 1;
        }
        if self.pos == start {
            return Err(match self.peek() {
                None => PgmError::InvalidHeader(format!("missing {field}")),
                Some(b) => PgmError::InvalidHeader(format!(
                    "expected {field}, found byte 0x{b:02x}"
                )),
            });
        }
        if !self.at_boundary() {
            return Err(PgmError::InvalidHeader(format!(
                "{field} is followed by a non-separator byte"
            )));
        }
        if value == 0 {
            return Err(PgmError::InvalidHeaderValue { field });
        }
        Ok(value)
    }

    /// Step over everything between the max value and the raster.
    ///
    /// ASCII rasters are whitespace-delimited, so any mix of whitespace and
    /// comments is skipped. A binary raster starts after the rest of the
    /// max-value line: trailing blanks, an optional comment and one line
    /// terminator. Without a line break there, exactly one whitespace byte
    /// separates header and raster.
    fn raster_separator(&mut self, variant: PgmVariant) {
        if variant == PgmVariant::Ascii {
            self.skip_whitespace_and_comments();
            return;
        }
        let separator = self.pos;
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'#') => self.skip_comment(),
            Some(b'\n' | b'\r') => self.line_terminator(),
            Some(_) => self.pos = separator + 1,
            None => {}
        }
    }
}

/// Parse the header. `Ok(None)` means the magic is not `P2` or `P5`.
pub(crate) fn parse_header(data: &[u8]) -> Result<Option<PgmHeader>, PgmError> {
    let mut cursor = Cursor { data, pos: 0 };
    let Some(variant) = cursor.magic() else {
        return Ok(None);
    };
    let width = cursor.number("width")?;
    let height = cursor.number("height")?;
    let max_value = cursor.number("max value")?;
    let max_value =
        u16::try_from(max_value).map_err(|_| PgmError::UnsupportedMaxValue(max_value))?;
    cursor.raster_separator(variant);

    Ok(Some(PgmHeader {
        variant,
        width,
        height,
        max_value,
        data_offset: cursor.pos,
    }))
}
