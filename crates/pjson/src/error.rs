use bstr::{BStr, BString, ByteSlice};
use thiserror::Error;

/// A parse failure: what went wrong, and where.
///
/// The `Display` form is `"<message>: <rest of input>"`, where the rest of
/// the input runs from the failure point up to, but not including, the last
/// byte of the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {snippet}")]
pub struct ParseError {
    kind: ErrorKind,
    snippet: BString,
    offset: usize,
    line: usize,
    column: usize,
}

/// The fixed set of parse failure messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A keyword other than `true`, `false` or `null`.
    #[error("Unknown token")]
    UnknownToken,
    /// A bad escape, or a string that is never closed.
    #[error("Invalid string token")]
    InvalidStringToken,
    /// A byte that cannot start a value.
    #[error("Invalid sequence")]
    InvalidSequence,
    /// An object member that does not start with a string key.
    #[error("Expected \"\\\"\" but not found")]
    ExpectedQuote,
    /// A key that is not followed by `:`.
    #[error("Expected \":\" but not found")]
    ExpectedColon,
    /// An object member that is not followed by `,` or `}`.
    #[error("Expected \",\" or \"}}\" but not found")]
    ExpectedCommaOrBrace,
    /// An array element that is not followed by `,` or `]`.
    #[error("Expected \",\" or \"]\" but not found")]
    ExpectedCommaOrBracket,
    /// The input ended in the middle of a value.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    /// Number text that does not convert to an integer or a float.
    #[error("Invalid number")]
    InvalidNumber,
    /// Containers nested deeper than [`ParserOptions::max_depth`].
    ///
    /// [`ParserOptions::max_depth`]: crate::ParserOptions::max_depth
    #[error("Nesting too deep")]
    NestingTooDeep,
    /// Non-whitespace input after the root value.
    #[error("Unexpected trailing content")]
    TrailingContent,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input[..offset];
        let line = consumed.find_iter(b"\n").count() + 1;
        let column = match consumed.rfind_byte(b'\n') {
            Some(newline) => offset - newline,
            None => offset + 1,
        };

        Self {
            kind,
            snippet: diagnostic_snippet(input, offset).into(),
            offset,
            line,
            column,
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The unparsed input at the failure point, minus the document's last
    /// byte.
    #[must_use]
    pub fn snippet(&self) -> &BStr {
        self.snippet.as_bstr()
    }

    /// Byte offset of the cursor when the parse failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of [`offset`](Self::offset).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based byte column of [`offset`](Self::offset) within its line.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

// `input[offset .. len - 1]`, empty once the cursor reaches the last byte.
fn diagnostic_snippet(input: &[u8], offset: usize) -> &[u8] {
    let end = input.len().saturating_sub(1);
    input.get(offset..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_excludes_the_last_byte() {
        let err = ParseError::new(ErrorKind::InvalidSequence, b"[1, @x]", 4);
        assert_eq!(err.snippet(), "@x");
        assert_eq!(err.to_string(), "Invalid sequence: @x");
    }

    #[test]
    fn snippet_is_empty_at_the_end() {
        let input = b"\"abc";
        for offset in [3, 4, 9] {
            let err = ParseError::new(ErrorKind::InvalidStringToken, input, offset);
            assert_eq!(err.snippet(), "");
        }
        assert_eq!(
            ParseError::new(ErrorKind::InvalidStringToken, input, 4).to_string(),
            "Invalid string token: "
        );
    }

    #[test]
    fn offset_is_clamped_to_the_input() {
        let err = ParseError::new(ErrorKind::UnexpectedEndOfInput, b"[", 7);
        assert_eq!(err.offset(), 1);
        assert_eq!((err.line(), err.column()), (1, 2));
    }

    #[test]
    fn line_and_column_count_bytes() {
        let input = b"{\n  \"a\": 1,\n  \"b\" 2\n}";
        let offset = input.iter().position(|&b| b == b'2').unwrap();
        let err = ParseError::new(ErrorKind::ExpectedColon, input, offset);
        assert_eq!((err.line(), err.column()), (3, 7));
    }

    #[test]
    fn messages_match_the_fixed_set() {
        let cases = [
            (ErrorKind::UnknownToken, "Unknown token"),
            (ErrorKind::InvalidStringToken, "Invalid string token"),
            (ErrorKind::InvalidSequence, "Invalid sequence"),
            (ErrorKind::ExpectedQuote, r#"Expected "\"" but not found"#),
            (ErrorKind::ExpectedColon, r#"Expected ":" but not found"#),
            (ErrorKind::ExpectedCommaOrBrace, r#"Expected "," or "}" but not found"#),
            (ErrorKind::ExpectedCommaOrBracket, r#"Expected "," or "]" but not found"#),
            (ErrorKind::UnexpectedEndOfInput, "Unexpected end of input"),
        ];
        for (kind, message) in cases {
            assert_eq!(kind.to_string(), message);
        }
    }
}
