use bstr::ByteSlice;

use super::Context;
use crate::{ErrorKind, ParseError, Value};

/// Lexical hint distinguishing integers from floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberLexeme<'a> {
    Integer(&'a str),
    Float(&'a str),
}

impl<'a> NumberLexeme<'a> {
    /// Default rule: a `.` anywhere makes a float.
    fn classify(text: &'a str) -> Self {
        if text.contains('.') {
            Self::Float(text)
        } else {
            Self::Integer(text)
        }
    }

    /// RFC 8259 rule: fraction or exponent makes a float; anything outside
    /// the grammar is rejected.
    fn classify_strict(text: &'a str) -> Option<Self> {
        let b = text.as_bytes();
        let mut i = usize::from(b.first() == Some(&b'-'));
        match b.get(i) {
            Some(b'0') => i += 1,
            Some(b'1'..=b'9') => i += digits(&b[i..]),
            _ => return None,
        }
        let int_end = i;
        if b.get(i) == Some(&b'.') {
            let n = digits(&b[i + 1..]);
            if n == 0 {
                return None;
            }
            i += 1 + n;
        }
        if matches!(b.get(i), Some(b'e' | b'E')) {
            i += 1;
            if matches!(b.get(i), Some(b'+' | b'-')) {
                i += 1;
            }
            let n = digits(&b[i..]);
            if n == 0 {
                return None;
            }
            i += n;
        }
        match (i == b.len(), i == int_end) {
            (false, _) => None,
            (true, true) => Some(Self::Integer(text)),
            (true, false) => Some(Self::Float(text)),
        }
    }
}

fn digits(b: &[u8]) -> usize {
    b.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn is_number_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Evaluates integer text that may carry an exponent (`12e3`), exactly.
fn parse_integer(text: &str) -> Option<i64> {
    let Some((mantissa, exponent)) = text.split_once(['e', 'E']) else {
        return text.parse().ok();
    };
    let mantissa: i64 = mantissa.parse().ok()?;
    let exponent: i32 = exponent.parse().ok()?;
    if mantissa == 0 {
        return Some(0);
    }
    let scale = 10_i64.checked_pow(exponent.unsigned_abs())?;
    if exponent >= 0 {
        mantissa.checked_mul(scale)
    } else if mantissa % scale == 0 {
        Some(mantissa / scale)
    } else {
        None
    }
}

impl Context<'_> {
    /// Parses a number.
    ///
    /// The first byte is taken as is; the run continues over digits, signs,
    /// `.`, `e` and `E`. Whether the run is a valid number is only decided
    /// when it is converted.
    pub(super) fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.index;
        self.next_byte()?;
        while self.has_next() {
            let c = self.next_byte()?;
            if !is_number_byte(c) {
                self.back();
                break;
            }
        }

        // Only ASCII bytes were consumed.
        let Ok(text) = self.buf[start..self.index].to_str() else {
            return Err(self.error(ErrorKind::InvalidNumber));
        };
        let lexeme = if self.options.strict_numbers {
            NumberLexeme::classify_strict(text)
        } else {
            Some(NumberLexeme::classify(text))
        };
        let value = match lexeme {
            Some(NumberLexeme::Integer(text)) => parse_integer(text).map(Value::Integer),
            Some(NumberLexeme::Float(text)) => text.parse().ok().map(Value::Float),
            None => None,
        };
        // Reported at the start of the literal.
        value.ok_or_else(|| self.error_at(start, ErrorKind::InvalidNumber))
    }
}
