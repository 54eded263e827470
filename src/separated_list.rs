use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that matches values alternated with a separator
///
/// Parses `value`, `separator`, `value`, `separator`, ... starting with an
/// attempted value and stopping at the first failure of either part. The
/// failed attempt is rolled back to the last successful part, which means a
/// separator that matched before a failing value stays consumed: `"1,2,"`
/// ends positioned after the trailing comma. Zero captures are not an
/// error: the combinator succeeds with an empty vector and the entry state
/// untouched. Use [`SeparatedList1`] when at least one value is required.
pub struct SeparatedList<P, PS> {
    value: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(value: P, separator: PS) -> Self {
        SeparatedList { value, separator }
    }
}

fn parse_list<'src, P, PS>(
    value: &P,
    separator: &PS,
    state: ParseState<'src>,
) -> (Vec<P::Output>, ParseState<'src>)
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    let mut results = Vec::new();
    let mut state = state;

    loop {
        let (item, after_value) = match value.parse(state) {
            Ok(ok) => ok,
            Err(_) => break,
        };
        results.push(item);
        state = after_value;

        match separator.parse(state) {
            Ok((_, after_separator)) => state = after_separator,
            Err(_) => break,
        }
    }

    (results, state)
}

impl<'src, P, PS> Parser<'src> for SeparatedList<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        Ok(parse_list(&self.value, &self.separator, state))
    }
}

/// Parser combinator that matches a separated list with at least one value
///
/// Identical to [`SeparatedList`] except that zero captures fail with an
/// empty-list error at the entry index.
pub struct SeparatedList1<P, PS> {
    value: P,
    separator: PS,
}

impl<P, PS> SeparatedList1<P, PS> {
    pub fn new(value: P, separator: PS) -> Self {
        SeparatedList1 { value, separator }
    }
}

impl<'src, P, PS> Parser<'src> for SeparatedList1<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let (results, next_state) = parse_list(&self.value, &self.separator, state);

        if results.is_empty() {
            return Err(ParseError::EmptyList(SourceLoc::new(
                state.source(),
                state.index(),
            )));
        }

        Ok((results, next_state))
    }
}

/// Creates a parser for a possibly-empty separated list
pub fn separated_list<'src, P, PS>(value: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    SeparatedList::new(value, separator)
}

/// Creates a parser for a separated list with at least one value
pub fn separated_list1<'src, P, PS>(value: P, separator: PS) -> SeparatedList1<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    SeparatedList1::new(value, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::class::digits;

    #[test]
    fn test_single_value() {
        let parser = separated_list(digits(), is_char(','));

        let (values, index) = parser.run("42").unwrap();
        assert_eq!(values, vec!["42"]);
        assert_eq!(index, 2);
    }

    #[test]
    fn test_multiple_values() {
        let parser = separated_list(digits(), is_char(','));

        let (values, index) = parser.run("1,2,3").unwrap();
        assert_eq!(values, vec!["1", "2", "3"]);
        assert_eq!(index, 5);
    }

    #[test]
    fn test_empty_list_succeeds() {
        let parser = separated_list(digits(), is_char(','));

        let (values, index) = parser.run("abc").unwrap();
        assert!(values.is_empty());
        assert_eq!(index, 0);
    }

    #[test]
    fn test_empty_input_succeeds() {
        let parser = separated_list(digits(), is_char(','));

        let (values, index) = parser.run("").unwrap();
        assert!(values.is_empty());
        assert_eq!(index, 0);
    }

    #[test]
    fn test_stops_at_missing_value_after_separator() {
        // The separator after "2" matched, so it stays consumed; only the
        // failed value attempt is discarded
        let parser = separated_list(digits(), is_char(','));

        let (values, index) = parser.run("1,2,x").unwrap();
        assert_eq!(values, vec!["1", "2"]);
        assert_eq!(index, 4);
    }

    #[test]
    fn test_trailing_separator_stays_consumed() {
        let parser = separated_list(digits(), is_char(','));

        let (values, index) = parser.run("1,2,").unwrap();
        assert_eq!(values, vec!["1", "2"]);
        assert_eq!(index, 4);
    }

    #[test]
    fn test_separated_list1_requires_one_value() {
        let parser = separated_list1(digits(), is_char(','));

        let error = parser.run("").unwrap_err();
        assert!(matches!(error, ParseError::EmptyList(_)));
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_separated_list1_rejects_non_matching_input() {
        let parser = separated_list1(digits(), is_char(','));

        let error = parser.run("abc").unwrap_err();
        assert!(matches!(error, ParseError::EmptyList(_)));
    }

    #[test]
    fn test_separated_list1_passes_through_values() {
        let parser = separated_list1(digits(), is_char(','));

        let (values, index) = parser.run("7,8").unwrap();
        assert_eq!(values, vec!["7", "8"]);
        assert_eq!(index, 3);
    }
}
