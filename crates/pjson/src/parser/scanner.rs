//! Cursor primitives.
//!
//! Invariants
//! - `index <= buf.len()` at all times.
//! - After any primitive, `index` points at the next unconsumed byte, except
//!   right after [`Context::back`], which un-reads the byte just returned by
//!   [`Context::next_byte`].

use super::Context;
use crate::{ErrorKind, ParseError, tracing_macros::trace};

impl Context<'_> {
    #[inline]
    pub(crate) fn has_next(&self) -> bool {
        self.index < self.buf.len()
    }

    /// Consumes one byte; fails at the end of input.
    #[inline]
    pub(crate) fn next_byte(&mut self) -> Result<u8, ParseError> {
        let Some(&b) = self.buf.get(self.index) else {
            return Err(self.error(ErrorKind::UnexpectedEndOfInput));
        };
        self.index += 1;
        Ok(b)
    }

    /// Un-reads the byte returned by the previous [`next_byte`](Self::next_byte).
    #[inline]
    pub(crate) fn back(&mut self) {
        debug_assert!(self.index > 0, "cursor rewound past the start of input");
        self.index = self.index.saturating_sub(1);
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.buf.get(self.index).copied()
    }

    /// Skips spaces, tabs, carriage returns and line feeds. Nothing else
    /// counts as whitespace.
    pub(crate) fn skip_white(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.current() {
            self.index += 1;
        }
    }

    #[cold]
    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(self.index, kind)
    }

    #[cold]
    pub(crate) fn error_at(&self, at: usize, kind: ErrorKind) -> ParseError {
        trace!(at, %kind, "parse error");
        ParseError::new(kind, self.buf, at)
    }
}
