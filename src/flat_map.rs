use crate::parser::{Parsed, Parser};
use crate::result::ParseResult;

/// Parser combinator that continues a success with a function of its value
/// and remainder
///
/// The function returns a full `ParseResult`, so it can reject a value, parse
/// further from the remainder, or both.
#[derive(Clone)]
pub struct FlatMap<P, F> {
    parser: P,
    continuation: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, continuation: F) -> Self {
        FlatMap {
            parser,
            continuation,
        }
    }
}

impl<'code, P, F, U> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output, P::Cursor) -> ParseResult<P::Cursor, U, P::Error>,
{
    type Cursor = P::Cursor;
    type Output = U;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        self.parser.parse(cursor).flat_map(&self.continuation)
    }
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, U>(self, continuation: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output, Self::Cursor) -> ParseResult<Self::Cursor, U, Self::Error>,
    {
        FlatMap::new(self, continuation)
    }
}

/// Implement FlatMapExt for all parsers
impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}
