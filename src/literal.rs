use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use crate::state::ParseState;
use std::borrow::Cow;

/// Parser that matches an exact string at the cursor
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'src> Parser<'src> for LiteralParser {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let rest = state.rest();

        if rest.is_empty() {
            return Err(ParseError::UnexpectedEndOfInput(SourceLoc::new(
                state.source(),
                state.index(),
            )));
        }

        if rest.starts_with(self.expected.as_ref()) {
            let matched = self.expected.clone();
            return Ok((matched, state.advance(self.expected.len())));
        }

        // Echo back about as much input as we expected, so the message
        // shows what sat at the cursor instead of the whole remainder
        let found: String = rest.chars().take(self.expected.chars().count()).collect();
        Err(ParseError::LiteralMismatch {
            expected: self.expected.clone(),
            found,
            loc: SourceLoc::new(state.source(), state.index()),
        })
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}
