use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that succeeds only when the entire source has been consumed
///
/// Useful as the final step of a grammar to reject trailing garbage.
pub struct EndOfInputParser;

impl EndOfInputParser {
    pub fn new() -> Self {
        EndOfInputParser
    }
}

impl Default for EndOfInputParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<'src> Parser<'src> for EndOfInputParser {
    type Output = ();

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        if state.at_end() {
            Ok(((), state))
        } else {
            Err(ParseError::syntax(
                "expected end of input",
                SourceLoc::new(state.source(), state.index()),
            ))
        }
    }
}

/// Convenience function to create an EndOfInputParser
pub fn end_of_input() -> EndOfInputParser {
    EndOfInputParser::new()
}
