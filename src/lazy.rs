use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use crate::state::ParseState;
use std::marker::PhantomData;

/// Maximum number of nested lazy frames before a parse is aborted
///
/// Recursive grammars map lazy nesting onto host call-stack depth, so the
/// bound has to sit well below the point where deeply nested input would
/// overflow the stack. Exceeding it is an ordinary parse error.
pub const MAX_RECURSION_DEPTH: usize = 256;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is what breaks the chicken-and-egg problem of recursive and mutually
/// recursive grammar rules: eager construction would recurse infinitely
/// before any input is read.
pub struct Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    factory: F,
    _phantom: PhantomData<&'src ()>,
}

impl<'src, F, P> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _phantom: PhantomData,
        }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let entry_depth = state.depth();
        if entry_depth >= MAX_RECURSION_DEPTH {
            return Err(ParseError::syntax(
                "recursion depth limit exceeded",
                SourceLoc::new(state.source(), state.index()),
            ));
        }

        let parser = (self.factory)();
        let (value, next_state) = parser.parse(state.deepen())?;
        Ok((value, next_state.at_depth(entry_depth)))
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'src, F, P>(factory: F) -> Lazy<'src, F, P>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    Lazy::new(factory)
}
