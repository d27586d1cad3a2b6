use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::result::ParseResult;
use std::marker::PhantomData;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Cursor: Cursor<'code>;
    type Output;
    type Error: ParseError;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns a success with the parsed value and the cursor past the
    /// consumed input, or a failure. Failures do not consume input: the
    /// caller still holds the cursor it passed in.
    fn parse(&self, cursor: Self::Cursor) -> ParseResult<Self::Cursor, Self::Output, Self::Error>;
}

/// The result type produced by parser `P`
pub type Parsed<'code, P> = ParseResult<
    <P as Parser<'code>>::Cursor,
    <P as Parser<'code>>::Output,
    <P as Parser<'code>>::Error,
>;

/// Parser backed by a plain function or closure
pub struct FnParser<F, C> {
    function: F,
    _cursor: PhantomData<fn(C)>,
}

impl<F: Clone, C> Clone for FnParser<F, C> {
    fn clone(&self) -> Self {
        FnParser {
            function: self.function.clone(),
            _cursor: PhantomData,
        }
    }
}

impl<'code, F, C, O, E> Parser<'code> for FnParser<F, C>
where
    C: Cursor<'code>,
    E: ParseError,
    F: Fn(C) -> ParseResult<C, O, E>,
{
    type Cursor = C;
    type Output = O;
    type Error = E;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        (self.function)(cursor)
    }
}

/// Wrap a function from cursor to `ParseResult` as a parser
///
/// This is how externally supplied leaf parsers join the combinators.
pub fn parser_fn<'code, F, C, O, E>(function: F) -> FnParser<F, C>
where
    C: Cursor<'code>,
    E: ParseError,
    F: Fn(C) -> ParseResult<C, O, E>,
{
    FnParser {
        function,
        _cursor: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ByteCursor;
    use crate::error::LeafError;

    fn upper<'code>(cursor: ByteCursor<'code>) -> ParseResult<ByteCursor<'code>, u8, LeafError> {
        match cursor.value() {
            Some(byte) if byte.is_ascii_uppercase() => ParseResult::success(byte, cursor.next()),
            Some(byte) => ParseResult::fail(LeafError::unexpected(
                "uppercase letter",
                format!("{}", byte as char),
                &cursor,
            )),
            None => ParseResult::fail(LeafError::end_of_input(&cursor)),
        }
    }

    #[test]
    fn test_function_parser() {
        let parser = parser_fn(upper);

        let (byte, rest) = parser.parse(ByteCursor::new(b"Ab")).into_result().unwrap();
        assert_eq!(byte, b'A');
        assert_eq!(rest.remaining(), b"b");

        assert!(parser.parse(ByteCursor::new(b"ab")).is_failed());
        assert!(parser.parse(ByteCursor::new(b"")).is_failed());
    }

    #[test]
    fn test_closure_parser() {
        let expected = b'x';
        let parser = parser_fn(move |cursor: ByteCursor<'static>| match cursor.value() {
            Some(byte) if byte == expected => ParseResult::success((), cursor.next()),
            _ => ParseResult::fail(LeafError::unexpected("'x'", "something else", &cursor)),
        });

        assert!(parser.parse(ByteCursor::new(b"x")).is_success());
        assert!(parser.parse(ByteCursor::new(b"y")).is_failed());
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = parser_fn(upper);
        let cursor = ByteCursor::new(b"QR");

        // Same input, same answer: nothing is consumed from the caller's cursor
        let first = parser.parse(cursor);
        let second = parser.parse(cursor);
        assert_eq!(first, second);
    }
}
