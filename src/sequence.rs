use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that applies each parser in order and collects the results
///
/// Each parser starts from the state the previous one produced; the first
/// failure aborts the whole sequence and no later parser runs. On success
/// the output holds every sub-result in input order and the index is
/// wherever the last parser stopped.
///
/// The parsers are boxed so a sequence can mix any parser shapes that agree
/// on the output type. For two-step heterogeneous sequencing, `and` avoids
/// the boxing.
pub struct Sequence<'src, O> {
    parsers: Vec<Box<dyn Parser<'src, Output = O> + 'src>>,
}

impl<'src, O> Sequence<'src, O> {
    pub fn new(parsers: Vec<Box<dyn Parser<'src, Output = O> + 'src>>) -> Self {
        Sequence { parsers }
    }
}

impl<'src, O> Parser<'src> for Sequence<'src, O> {
    type Output = Vec<O>;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let mut results = Vec::with_capacity(self.parsers.len());
        let mut state = state;

        for parser in &self.parsers {
            let (value, next_state) = parser.parse(state)?;
            results.push(value);
            state = next_state;
        }

        Ok((results, state))
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'src, O>(parsers: Vec<Box<dyn Parser<'src, Output = O> + 'src>>) -> Sequence<'src, O> {
    Sequence::new(parsers)
}
