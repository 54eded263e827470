use crate::error::ParseError;
use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// The mapper is total over the success value: it runs only when the inner
/// parse succeeded and cannot itself introduce a failure. Failures pass
/// through untouched.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, T, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(
        &self,
        state: ParseState<'src>,
    ) -> Result<(Self::Output, ParseState<'src>), ParseError<'src>> {
        let (value, state) = self.parser.parse(state)?;
        Ok(((self.mapper)(value), state))
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::class::digits;
    use crate::or::OrExt;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Number(i64),
    }

    #[test]
    fn test_map_digits_to_number() {
        let parser = digits().map(|run| run.parse::<i64>().unwrap());

        let (value, index) = parser.run("123").unwrap();
        assert_eq!(value, 123);
        assert_eq!(index, 3);
    }

    #[test]
    fn test_map_to_enum() {
        let parser = is_char('X').map(Token::Letter);

        let (token, _) = parser.run("X").unwrap();
        assert_eq!(token, Token::Letter('X'));
    }

    #[test]
    fn test_map_chaining() {
        let parser = digits()
            .map(|run| run.parse::<i64>().unwrap())
            .map(|n| n * 2)
            .map(|n| format!("doubled: {}", n));

        let (value, _) = parser.run("21").unwrap();
        assert_eq!(value, "doubled: 42");
    }

    #[test]
    fn test_map_preserves_index() {
        let parser = digits().map(str::len);

        let (value, index) = parser.run("1234rest").unwrap();
        assert_eq!(value, 4);
        assert_eq!(index, 4);
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = digits().map(|run| run.parse::<i64>().unwrap());

        let error = parser.run("xyz").unwrap_err();
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_map_identity_is_noop() {
        let plain = digits();
        let mapped = digits().map(|x| x);

        assert_eq!(plain.run("123abc").unwrap(), mapped.run("123abc").unwrap());
        assert_eq!(
            plain.run("abc").unwrap_err(),
            mapped.run("abc").unwrap_err()
        );
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let letter = is_char('A').map(Token::Letter);
        let number = digits().map(|run| Token::Number(run.parse().unwrap()));
        let parser = letter.or(number);

        let (token, _) = parser.run("42").unwrap();
        assert_eq!(token, Token::Number(42));
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(is_char('9'), |c| c.to_digit(10).unwrap());

        let (value, _) = parser.run("9").unwrap();
        assert_eq!(value, 9);
    }
}
