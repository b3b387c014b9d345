//! Recursive-descent parser.
//!
//! There is no separate lexer: the [`Context`] reads bytes straight from the
//! input and each sub-parser builds its part of the [`Value`] tree as it
//! goes. The pieces live in sibling modules as further `impl Context` blocks:
//!
//! - `scanner`: cursor primitives (`has_next`, `next_byte`, `back`,
//!   `current`, `skip_white`, `error`);
//! - `literal`: `true`, `false` and `null`;
//! - `numbers`: number text and its integer/float classification;
//! - `strings`: string literals, escapes and `\u` encoding.
//!
//! Objects and arrays are parsed here, next to the dispatcher that they
//! recurse through.

mod escape_buffer;
mod literal;
mod numbers;
mod scanner;
mod strings;


use crate::{
    ErrorKind, ParseError, ParserOptions,
    tracing_macros::{debug, trace},
    value::{Array, Map, Value},
};

/// Parsing state for one document: the input, a byte cursor and the current
/// container depth.
///
/// A `Context` is cheap to create and is meant to be used for a single
/// top-level parse. It never shares state with other contexts, so separate
/// documents can be parsed concurrently on separate threads.
///
/// # Examples
///
/// Parse a value at the start of a larger buffer and find where it ended:
///
/// ```rust
/// use pjson::{Context, Value};
///
/// let input = br#"[1, 2] and then some"#;
/// let mut cx = Context::new(input);
/// let value = cx.parse_value()?;
/// assert_eq!(value, Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
/// assert_eq!(cx.position(), 6);
/// # Ok::<(), pjson::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Context<'src> {
    buf: &'src [u8],
    index: usize,
    depth: usize,
    options: ParserOptions,
}

impl<'src> Context<'src> {
    /// Creates a context over `input` with the default options.
    #[must_use]
    pub fn new(input: &'src [u8]) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a context over `input` with explicit options.
    #[must_use]
    pub fn with_options(input: &'src [u8], options: ParserOptions) -> Self {
        Self {
            buf: input,
            index: 0,
            depth: 0,
            options,
        }
    }

    /// Byte offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Parses a whole document: one value, surrounded only by whitespace
    /// unless [`ParserOptions::allow_trailing_content`] is set.
    ///
    /// # Errors
    ///
    /// Fails on malformed input, on input without a value
    /// ([`ErrorKind::UnexpectedEndOfInput`]) and on leftover input
    /// ([`ErrorKind::TrailingContent`]).
    pub fn parse_document(&mut self) -> Result<Value, ParseError> {
        debug!(len = self.buf.len(), "parsing document");
        self.depth = 0;
        let value = self.value()?;
        if !self.options.allow_trailing_content {
            self.skip_white();
            if self.has_next() {
                return Err(self.error(ErrorKind::TrailingContent));
            }
        }
        debug!(end = self.index, "parsed document");
        Ok(value)
    }

    /// Parses the next value, skipping leading whitespace.
    ///
    /// The cursor is left directly after the value. After a failure it stays
    /// where the error was detected, and the context can be used for another
    /// call: nesting is counted afresh on every call.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidSequence`] when the next significant
    /// byte cannot start a value, with [`ErrorKind::UnexpectedEndOfInput`]
    /// when there is none, and with the sub-parsers' errors otherwise.
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.depth = 0;
        self.value()
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        self.skip_white();
        let Some(c) = self.current() else {
            return Err(self.error(ErrorKind::UnexpectedEndOfInput));
        };
        trace!(at = self.index, byte = c, "dispatch");
        match c {
            b'{' => self.parse_object(),
            b'[' => self.parse_array(),
            b'"' => self.parse_string().map(Value::String),
            b'0'..=b'9' | b'-' => self.parse_number(),
            b't' | b'f' | b'n' => self.parse_constant(),
            _ => Err(self.error(ErrorKind::InvalidSequence)),
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.next_byte()?;
        self.enter()?;
        let mut members = Map::new();
        let mut after_comma = false;
        loop {
            self.skip_white();
            let c = self.next_byte()?;
            if c == b'}' {
                if after_comma && !self.options.allow_trailing_commas {
                    return Err(self.error(ErrorKind::ExpectedQuote));
                }
                break;
            }
            if c != b'"' {
                return Err(self.error(ErrorKind::ExpectedQuote));
            }
            self.back();
            let key = self.parse_string()?;

            self.skip_white();
            if self.next_byte()? != b':' {
                return Err(self.error(ErrorKind::ExpectedColon));
            }
            let value = self.value()?;
            // Duplicate keys keep their first position and take the last value.
            members.insert(key, value);

            self.skip_white();
            match self.next_byte()? {
                b'}' => break,
                b',' => after_comma = true,
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrBrace)),
            }
        }
        self.leave();
        Ok(Value::Object(members))
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.next_byte()?;
        self.enter()?;
        let mut items = Array::new();
        loop {
            self.skip_white();
            if self.current() == Some(b']') {
                // Elements are only ever followed by `,` here.
                if !items.is_empty() && !self.options.allow_trailing_commas {
                    self.next_byte()?;
                    return Err(self.error(ErrorKind::ExpectedCommaOrBracket));
                }
                self.next_byte()?;
                break;
            }
            let item = self.value()?;
            self.skip_white();
            let c = self.next_byte()?;
            items.push(item);
            match c {
                b']' => break,
                b',' => {}
                _ => return Err(self.error(ErrorKind::ExpectedCommaOrBracket)),
            }
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(self.error(ErrorKind::NestingTooDeep));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        debug_assert!(self.depth > 0, "left a container that was never entered");
        self.depth -= 1;
    }
}
