//! A small recursive-descent JSON parser.
//!
//! The parser scans and builds in a single pass: one [`Context`] owns the
//! input and a byte cursor, and [`Context::parse_value`] dispatches on the
//! next significant byte to the object, array, string, number and constant
//! parsers, building the [`Value`] tree on the way down.
//!
//! ```rust
//! use pjson::{Value, parse};
//!
//! let value = parse(r#"{"name": "pjson", "tags": ["json", 1, 2.5, null]}"#)?;
//! assert_eq!(value["name"].as_str(), Some("pjson"));
//! assert_eq!(value["tags"][1], Value::Integer(1));
//! assert_eq!(value["tags"][2], Value::Float(2.5));
//! # Ok::<(), pjson::ParseError>(())
//! ```
//!
//! # Compatibility notes
//!
//! The default [`ParserOptions`] keep a few lenient value rules:
//!
//! - A number is a float exactly when its text contains a `.`; `1e5` is the
//!   integer `100000`.
//! - Keywords are matched by accumulating letters of `true`/`false`/`null`.
//! - `\u` escapes are encoded with the extended (up to six byte) UTF-8 table,
//!   and UTF-16 surrogate halves are encoded one by one rather than paired,
//!   so a string value is not guaranteed to be valid UTF-8. String values are
//!   therefore [`BString`]s.
//! - A `\u` escape takes at most four hex digits, so `"\u00e9abc"` stays
//!   `éabc`. [`ParserOptions::unbounded_unicode_escapes`] reads the whole hex
//!   run as one code point instead, which is the only way to reach the four to
//!   six byte rows of the table.
//!
//! [`ParserOptions::strict`] switches to RFC 8259 keywords and numbers.

mod tracing_macros;

mod error;
mod options;
mod parser;
mod value;


pub use bstr::{BStr, BString};
pub use error::{ErrorKind, ParseError};
pub use options::{DEFAULT_MAX_DEPTH, ParserOptions};
pub use parser::Context;
pub use value::{Array, Map, Value};

/// Parses a complete JSON document with the default [`ParserOptions`].
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed input, for input holding no value,
/// and for non-whitespace content after the root value.
pub fn parse(text: impl AsRef<[u8]>) -> Result<Value, ParseError> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses a complete JSON document with explicit options.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed input, as configured by `options`.
pub fn parse_with_options(
    text: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Value, ParseError> {
    Context::with_options(text.as_ref(), options).parse_document()
}
