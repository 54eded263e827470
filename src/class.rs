use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that matches a greedy run of characters satisfying a predicate
///
/// The run is longest-match and consumed atomically: the parser takes every
/// consecutive character the predicate accepts, and fails if that run is
/// empty. `class` names the character class for error messages.
pub struct CharClassParser<F> {
    predicate: F,
    class: &'static str,
}

impl<F> CharClassParser<F> {
    pub fn new(predicate: F, class: &'static str) -> Self {
        Self { predicate, class }
    }
}

impl<'src, F> Parser<'src> for CharClassParser<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'src str;

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

        let len = rest
            .char_indices()
            .find(|(_, c)| !(self.predicate)(*c))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        if len == 0 {
            return Err(ParseError::ClassMismatch {
                class: self.class,
                loc: SourceLoc::new(state.source(), state.index()),
            });
        }

        Ok((&rest[..len], state.advance(len)))
    }
}

/// Convenience function for a greedy run of one or more letters
pub fn letters() -> CharClassParser<fn(char) -> bool> {
    CharClassParser::new(char::is_alphabetic, "one or more letters")
}

/// Convenience function for a greedy run of one or more ASCII digits
pub fn digits() -> CharClassParser<fn(char) -> bool> {
    CharClassParser::new(|c| c.is_ascii_digit(), "one or more digits")
}

/// Convenience function to create a CharClassParser from any predicate
pub fn char_class<F>(predicate: F, class: &'static str) -> CharClassParser<F>
where
    F: Fn(char) -> bool,
{
    CharClassParser::new(predicate, class)
}
