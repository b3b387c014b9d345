use bstr::BString;

use super::{
    Context,
    escape_buffer::{UnicodeEscapeBuffer, encode_code_point},
};
use crate::{ErrorKind, ParseError};

impl Context<'_> {
    /// Parses a string literal starting at its opening quote.
    ///
    /// Unescaped bytes are copied as they are, control characters included.
    pub(super) fn parse_string(&mut self) -> Result<BString, ParseError> {
        self.next_byte()?;
        let mut out = Vec::new();
        while self.has_next() {
            match self.next_byte()? {
                b'"' => return Ok(out.into()),
                b'\\' => {
                    if !self.has_next() {
                        break;
                    }
                    match self.next_byte()? {
                        c @ (b'"' | b'\\' | b'/') => out.push(c),
                        b'b' => out.push(0x08),
                        b'f' => out.push(0x0c),
                        b'n' => out.push(b'\n'),
                        b'r' => out.push(b'\r'),
                        b't' => out.push(b'\t'),
                        b'u' => encode_code_point(self.parse_unicode_escape()?, &mut out),
                        _ => return Err(self.error(ErrorKind::InvalidStringToken)),
                    }
                }
                c => out.push(c),
            }
        }
        Err(self.error(ErrorKind::InvalidStringToken))
    }

    /// Reads the hex digits of a `\u` escape, stopping before the first byte
    /// that is not a hex digit and, unless
    /// [`unbounded_unicode_escapes`](crate::ParserOptions::unbounded_unicode_escapes)
    /// is set, after four digits.
    fn parse_unicode_escape(&mut self) -> Result<u32, ParseError> {
        let mut escape = if self.options.unbounded_unicode_escapes {
            UnicodeEscapeBuffer::unbounded()
        } else {
            UnicodeEscapeBuffer::new()
        };
        while !escape.is_full() && self.has_next() {
            let c = self.next_byte()?;
            if !escape.push(c) {
                self.back();
                break;
            }
        }
        escape
            .code_point()
            .ok_or_else(|| self.error(ErrorKind::InvalidStringToken))
    }
}
