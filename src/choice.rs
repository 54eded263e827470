use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that tries each alternative in order and returns the first success
///
/// Every alternative is tried against the state the combinator was handed,
/// left to right with no reordering; whatever a failed attempt consumed is
/// discarded. When all alternatives fail the combinator reports a single
/// exhausted-alternatives error at the entry index rather than enumerating
/// the individual failures. `or` keeps the last alternative's own error for
/// callers that want the finer-grained message.
pub struct Choice<'src, O> {
    parsers: Vec<Box<dyn Parser<'src, Output = O> + 'src>>,
}

impl<'src, O> Choice<'src, O> {
    pub fn new(parsers: Vec<Box<dyn Parser<'src, Output = O> + 'src>>) -> Self {
        Choice { parsers }
    }
}

impl<'src, O> Parser<'src> for Choice<'src, O> {
    type Output = O;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        for parser in &self.parsers {
            if let Ok(result) = parser.parse(state) {
                return Ok(result);
            }
        }

        Err(ParseError::ExhaustedAlternatives(SourceLoc::new(
            state.source(),
            state.index(),
        )))
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'src, O>(parsers: Vec<Box<dyn Parser<'src, Output = O> + 'src>>) -> Choice<'src, O> {
    Choice::new(parsers)
}
