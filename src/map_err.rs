use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;
use std::fmt;

/// Parser combinator that rewrites the error of a failed parse
///
/// The mirror image of `Map`: successes pass through unchanged, and the
/// mapper runs only on failure. The incoming error carries its position,
/// so grammar authors can attach context without altering control flow.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'src, P, F> Parser<'src> for MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(ParseError<'src>) -> ParseError<'src>,
{
    type Output = P::Output;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        self.parser.parse(state).map_err(&self.mapper)
    }
}

/// Convenience function to create a MapErr parser
pub fn map_err<'src, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'src>,
    F: Fn(ParseError<'src>) -> ParseError<'src>,
{
    MapErr::new(parser, mapper)
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'src>: Parser<'src> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError<'src>) -> ParseError<'src>,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'src, P> MapErrExt<'src> for P where P: Parser<'src> {}
