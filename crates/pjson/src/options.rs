#![allow(clippy::struct_excessive_bools)]

/// Nesting limit used by [`ParserOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the parser.
///
/// The defaults parse standard JSON structure strictly (no trailing commas,
/// nothing after the root value) while keeping the lenient value rules
/// described in the crate documentation.
///
/// # Examples
///
/// ```rust
/// use pjson::{ParserOptions, Value, parse_with_options};
///
/// let options = ParserOptions {
///     allow_trailing_commas: true,
///     ..ParserOptions::default()
/// };
/// let value = parse_with_options("[1, 2,]", options)?;
/// assert_eq!(value, Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
/// # Ok::<(), pjson::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether a `,` may directly precede the closing `]` or `}` of a
    /// container.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_commas: bool,

    /// Whether input after the root value is ignored instead of rejected.
    ///
    /// When `true`, [`parse`](crate::parse) stops after the first complete
    /// value, so `{} garbage` parses to an empty object.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_content: bool,

    /// Whether `true`, `false` and `null` must match exactly and end at a
    /// delimiter.
    ///
    /// When `false`, letters of the three keywords are accumulated until the
    /// run equals one of them, and whatever follows the keyword is left for
    /// the enclosing parser.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_literals: bool,

    /// Whether numbers must follow the RFC 8259 grammar.
    ///
    /// When `true`, a number is a float if it has a fraction or an exponent
    /// and an integer otherwise. When `false`, any run of digits, signs,
    /// `.`, `e` and `E` is accepted as number text, and only a `.` makes a
    /// float: `1e3` is the integer `1000`.
    ///
    /// # Default
    ///
    /// `false`
    pub strict_numbers: bool,

    /// Whether a `\u` escape reads every hex digit that follows it.
    ///
    /// When `false`, an escape takes at most four digits, so `"\u00e9abc"`
    /// decodes to `éabc`. When `true`, the whole hex run is one code point,
    /// so `"\u1F600"` decodes to U+1F600 and the longer rows of the extended
    /// UTF-8 table become reachable. Runs beyond 31 bits are rejected with
    /// [`ErrorKind::InvalidStringToken`](crate::ErrorKind::InvalidStringToken).
    ///
    /// # Default
    ///
    /// `false`
    pub unbounded_unicode_escapes: bool,

    /// Maximum number of nested arrays and objects.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`]
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_trailing_commas: false,
            allow_trailing_content: false,
            strict_literals: false,
            strict_numbers: false,
            unbounded_unicode_escapes: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserOptions {
    /// Options that accept RFC 8259 keywords and numbers only.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_literals: true,
            strict_numbers: true,
            ..Self::default()
        }
    }
}
