use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'src, P> Parser<'src> for Some<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let mut results = Vec::new();

        // First match is required
        let (first_value, mut state) = self.parser.parse(state)?;
        results.push(first_value);

        loop {
            match self.parser.parse(state) {
                Ok((value, next_state)) => {
                    results.push(value);
                    state = next_state;
                }
                Err(_) => break,
            }
        }

        Ok((results, state))
    }
}

/// Convenience function to create a Some parser
pub fn some<'src, P>(parser: P) -> Some<P>
where
    P: Parser<'src>,
{
    Some::new(parser)
}
