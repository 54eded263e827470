use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Applies the inner parser repeatedly, committing each success and rolling
/// the state back to the last success when an attempt fails. `Many` itself
/// never fails: zero matches succeed with an empty vector.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(state) {
                Ok((value, next_state)) => {
                    results.push(value);
                    state = next_state;
                }
                Err(_) => {
                    // Zero or more: the failed attempt is discarded
                    break;
                }
            }
        }

        Ok((results, state))
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}
