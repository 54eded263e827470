use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, `content`, `close` in order and returns just the content
/// value with the delimiter results discarded. Fails if any of the three
/// fails, at that part's own position.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'src, P1, P2, P3> Parser<'src> for Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
    P3: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let (_, state) = self.open.parse(state)?;
        let (content_value, state) = self.content.parse(state)?;
        let (_, state) = self.close.parse(state)?;

        Ok((content_value, state))
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'src, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
    P3: Parser<'src>,
{
    Between::new(open, content, close)
}
