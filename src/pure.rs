use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that always succeeds with a fixed value, consuming nothing
///
/// Mostly useful inside `chain` branches that already know their answer,
/// and as the unit of the bind operation: `p.chain(pure)` behaves exactly
/// like `p`.
pub struct PureParser<T> {
    value: T,
}

impl<T> PureParser<T> {
    pub fn new(value: T) -> Self {
        PureParser { value }
    }
}

impl<'src, T> Parser<'src> for PureParser<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        Ok((self.value.clone(), state))
    }
}

/// Convenience function to create a PureParser
pub fn pure<T: Clone>(value: T) -> PureParser<T> {
    PureParser::new(value)
}
