use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that consumes and returns a single character
pub struct AnyCharParser;

impl AnyCharParser {
    pub fn new() -> Self {
        AnyCharParser
    }
}

impl Default for AnyCharParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Parser<'src> for AnyCharParser {
    type Output = char;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        match state.rest().chars().next() {
            Some(c) => Ok((c, state.advance(c.len_utf8()))),
            None => Err(ParseError::UnexpectedEndOfInput(SourceLoc::new(
                state.source(),
                state.index(),
            ))),
        }
    }
}

/// Parser that matches a specific character
pub struct IsCharParser {
    expected: char,
}

impl IsCharParser {
    pub fn new(expected: char) -> Self {
        IsCharParser { expected }
    }
}

impl<'src> Parser<'src> for IsCharParser {
    type Output = char;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        match state.rest().chars().next() {
            Some(c) if c == self.expected => Ok((c, state.advance(c.len_utf8()))),
            Some(c) => Err(ParseError::LiteralMismatch {
                expected: self.expected.to_string().into(),
                found: c.to_string(),
                loc: SourceLoc::new(state.source(), state.index()),
            }),
            None => Err(ParseError::UnexpectedEndOfInput(SourceLoc::new(
                state.source(),
                state.index(),
            ))),
        }
    }
}

/// Convenience function to create an AnyCharParser
pub fn any_char() -> AnyCharParser {
    AnyCharParser::new()
}

/// Convenience function to create an IsCharParser
pub fn is_char(expected: char) -> IsCharParser {
    IsCharParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_char_success() {
        let parser = any_char();

        let (c, index) = parser.run("hello").unwrap();
        assert_eq!(c, 'h');
        assert_eq!(index, 1);
    }

    #[test]
    fn test_any_char_multibyte() {
        let parser = any_char();

        let (c, index) = parser.run("世界").unwrap();
        assert_eq!(c, '世');
        assert_eq!(index, '世'.len_utf8());
    }

    #[test]
    fn test_any_char_empty_input() {
        let parser = any_char();

        let error = parser.run("").unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEndOfInput(_)));
    }

    #[test]
    fn test_any_char_sequence() {
        let parser = any_char();
        let state = ParseState::new("abc");

        let (c1, state) = parser.parse(state).unwrap();
        let (c2, state) = parser.parse(state).unwrap();
        let (c3, state) = parser.parse(state).unwrap();

        assert_eq!((c1, c2, c3), ('a', 'b', 'c'));
        assert!(state.at_end());
    }

    #[test]
    fn test_is_char_success() {
        let parser = is_char('h');

        let (c, index) = parser.run("hello").unwrap();
        assert_eq!(c, 'h');
        assert_eq!(index, 1);
    }

    #[test]
    fn test_is_char_mismatch() {
        let parser = is_char('h');

        let error = parser.run("world").unwrap_err();
        assert_eq!(error.position(), 0);
        assert!(error.to_string().contains("tried to match \"h\""));
        assert!(error.to_string().contains("\"w\""));
    }

    #[test]
    fn test_is_char_empty_input() {
        let parser = is_char('h');

        let error = parser.run("").unwrap_err();
        assert!(matches!(error, ParseError::UnexpectedEndOfInput(_)));
    }

    #[test]
    fn test_is_char_does_not_consume_on_failure() {
        let parser = is_char('x');
        let state = ParseState::new("abc");

        assert!(parser.parse(state).is_err());
        // The caller's state is untouched and can be retried
        assert_eq!(state.index(), 0);
    }
}
