use crate::error::ParseError;
use crate::state::ParseState;

/// Core trait for parser combinators
///
/// A parser owns one pure transformation from a [`ParseState`] to either a
/// value plus the advanced state, or a [`ParseError`]. Failures must not
/// consume input: a failing parser returns an error and the caller still
/// holds the state it passed in, so alternatives can retry from there.
///
/// Parsers are immutable once constructed and reusable across any number
/// of `run` calls; nothing in a parser closes over a particular state.
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse from the given state
    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>>;

    /// Parse `source` from the beginning
    ///
    /// Seeds a fresh state at index 0 and returns the parsed value together
    /// with the residual index, or the error a failing grammar produced.
    /// Never panics.
    fn run(&self, source: &'src str) -> Result<(Self::Output, usize), ParseError<'src>> {
        let (value, state) = self.parse(ParseState::new(source))?;
        Ok((value, state.index()))
    }
}

/// Boxed parsers parse by delegation, which keeps the trait usable for
/// heterogeneous alternative lists and recursive grammar rules
impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        (**self).parse(state)
    }
}

impl<'a, 'src, P> Parser<'src> for &'a P
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        (**self).parse(state)
    }
}
