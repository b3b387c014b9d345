use super::Context;
use crate::{ErrorKind, ParseError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    True,
    False,
    Null,
}

impl Keyword {
    const ALL: [Keyword; 3] = [Keyword::True, Keyword::False, Keyword::Null];

    fn lexeme(self) -> &'static [u8] {
        match self {
            Keyword::True => b"true",
            Keyword::False => b"false",
            Keyword::Null => b"null",
        }
    }

    fn from_lexeme(s: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.lexeme() == s)
    }

    fn value(self) -> Value {
        match self {
            Keyword::True => Value::Boolean(true),
            Keyword::False => Value::Boolean(false),
            Keyword::Null => Value::Null,
        }
    }
}

/// Letters that occur in any of the three keywords.
fn is_keyword_letter(b: u8) -> bool {
    matches!(b, b't' | b'r' | b'u' | b'e' | b'f' | b'a' | b'l' | b's' | b'n')
}

impl Context<'_> {
    /// Parses `true`, `false` or `null`.
    ///
    /// On failure the cursor is moved back to the start of the token.
    pub(super) fn parse_constant(&mut self) -> Result<Value, ParseError> {
        if self.options.strict_literals {
            return self.parse_exact_keyword();
        }

        let start = self.index;
        while self.has_next() {
            let c = self.next_byte()?;
            if !is_keyword_letter(c) {
                self.back();
                break;
            }
            if let Some(keyword) = Keyword::from_lexeme(&self.buf[start..self.index]) {
                return Ok(keyword.value());
            }
        }
        self.index = start;
        Err(self.error(ErrorKind::UnknownToken))
    }

    fn parse_exact_keyword(&mut self) -> Result<Value, ParseError> {
        let rest = &self.buf[self.index..];
        let matched = Keyword::ALL.into_iter().find(|k| {
            let lexeme = k.lexeme();
            rest.starts_with(lexeme)
                && !rest
                    .get(lexeme.len())
                    .is_some_and(u8::is_ascii_alphanumeric)
        });
        match matched {
            Some(keyword) => {
                self.index += keyword.lexeme().len();
                Ok(keyword.value())
            }
            None => Err(self.error(ErrorKind::UnknownToken)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{Context, ErrorKind, ParserOptions, Value};

    fn constant(input: &str, options: ParserOptions) -> (Result<Value, ErrorKind>, usize) {
        let mut cx = Context::with_options(input.as_bytes(), options);
        let res = cx.parse_constant().map_err(|e| e.kind());
        (res, cx.position())
    }

    #[rstest]
    #[case("true", Value::Boolean(true), 4)]
    #[case("false", Value::Boolean(false), 5)]
    #[case("null", Value::Null, 4)]
    #[case("null,", Value::Null, 4)]
    // The keyword ends as soon as the accumulated letters spell it.
    #[case("trueee", Value::Boolean(true), 4)]
    #[case("nullx", Value::Null, 4)]
    fn lenient_keywords(#[case] input: &str, #[case] expected: Value, #[case] end: usize) {
        assert_eq!(constant(input, ParserOptions::default()), (Ok(expected), end));
    }

    #[rstest]
    #[case("tru")]
    #[case("nul]")]
    #[case("ttrue")]
    #[case("fals e")]
    fn lenient_unknown_tokens_rewind(#[case] input: &str) {
        assert_eq!(
            constant(input, ParserOptions::default()),
            (Err(ErrorKind::UnknownToken), 0)
        );
    }

    #[rstest]
    #[case("true", Ok(Value::Boolean(true)))]
    #[case("false]", Ok(Value::Boolean(false)))]
    #[case("null ", Ok(Value::Null))]
    #[case("trueee", Err(ErrorKind::UnknownToken))]
    #[case("null1", Err(ErrorKind::UnknownToken))]
    #[case("nul", Err(ErrorKind::UnknownToken))]
    fn strict_keywords(#[case] input: &str, #[case] expected: Result<Value, ErrorKind>) {
        assert_eq!(constant(input, ParserOptions::strict()).0, expected);
    }
}
