use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that computes the next parser from the parsed value
///
/// Monadic bind: run the inner parser, hand its value to `binder` to build
/// the parser for what comes next, and apply that parser to the already
/// advanced state. This is what lets a grammar branch on data it has just
/// parsed, e.g. read a type tag and pick the value parser accordingly.
/// Failures of the inner parser propagate without calling `binder`.
pub struct Chain<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Chain { parser, binder }
    }
}

impl<'src, P, F, Q> Parser<'src> for Chain<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'src>,
{
    type Output = Q::Output;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let (value, state) = self.parser.parse(state)?;
        (self.binder)(value).parse(state)
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'src, P, F, Q>(parser: P, binder: F) -> Chain<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'src>,
{
    Chain::new(parser, binder)
}

/// Extension trait to add .chain() method support for parsers
pub trait ChainExt<'src>: Parser<'src> + Sized {
    fn chain<F, Q>(self, binder: F) -> Chain<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'src>,
    {
        Chain::new(self, binder)
    }
}

/// Implement ChainExt for all parsers
impl<'src, P> ChainExt<'src> for P where P: Parser<'src> {}
