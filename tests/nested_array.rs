//! Nested integer array grammar built purely on the public API:
//! a value is a number or a bracketed, comma-separated list of values,
//! nested to any depth the input provides.

use descent::{Parser, between, digits, is_char, lazy, or, separated_list};
use descent::{MapExt, ParseError};

#[derive(Debug, PartialEq)]
enum Value {
    Number(i64),
    Array(Vec<Value>),
}

fn element<'src>() -> Box<dyn Parser<'src, Output = Value> + 'src> {
    Box::new(or(
        digits().map(|run| Value::Number(run.parse().unwrap())),
        lazy(array),
    ))
}

fn array<'src>() -> Box<dyn Parser<'src, Output = Value> + 'src> {
    Box::new(
        between(
            is_char('['),
            separated_list(lazy(element), is_char(',')),
            is_char(']'),
        )
        .map(Value::Array),
    )
}

fn number(n: i64) -> Value {
    Value::Number(n)
}

#[test]
fn parses_flat_array() {
    let (value, index) = array().run("[1,2,3]").unwrap();

    assert_eq!(value, Value::Array(vec![number(1), number(2), number(3)]));
    assert_eq!(index, 7);
}

#[test]
fn parses_nested_arrays() {
    let (value, index) = array().run("[1,2,[3,4],6]").unwrap();

    assert_eq!(
        value,
        Value::Array(vec![
            number(1),
            number(2),
            Value::Array(vec![number(3), number(4)]),
            number(6),
        ])
    );
    assert_eq!(index, 13);
}

#[test]
fn parses_empty_array() {
    let (value, _) = array().run("[]").unwrap();

    assert_eq!(value, Value::Array(vec![]));
}

#[test]
fn parses_deeply_nested_singleton() {
    let (value, _) = array().run("[[[[5]]]]").unwrap();

    let mut expected = number(5);
    for _ in 0..4 {
        expected = Value::Array(vec![expected]);
    }
    assert_eq!(value, expected);
}

#[test]
fn element_accepts_bare_number() {
    let (value, index) = element().run("37").unwrap();

    assert_eq!(value, number(37));
    assert_eq!(index, 2);
}

#[test]
fn missing_close_bracket_fails() {
    let error = array().run("[1,2").unwrap_err();

    assert_eq!(error.position(), 4);
}

#[test]
fn double_separator_fails_at_close() {
    // The second comma is consumed by the list, so the closing bracket
    // check lands on it and reports the failure there
    let error = array().run("[1,,2]").unwrap_err();

    assert_eq!(error.position(), 3);
}

#[test]
fn bare_garbage_is_exhausted_alternatives() {
    let error = element().run("!!").unwrap_err();

    // Both element branches fail from the entry index; `or` reports the
    // second branch's own error, here the missing open bracket
    assert_eq!(error.position(), 0);
    assert!(matches!(error, ParseError::LiteralMismatch { .. }));
}
