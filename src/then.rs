use crate::parser::{Parsed, Parser};

/// Parser combinator that runs a parser, discards its value, and continues
/// with a second parser on the remainder
///
/// The continuation is a thunk, built only after the first parser succeeds.
#[derive(Clone)]
pub struct Then<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Then<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Then { parser, next }
    }
}

impl<'code, P, F, Q> Parser<'code> for Then<P, F>
where
    P: Parser<'code>,
    F: Fn() -> Q,
    Q: Parser<'code, Cursor = P::Cursor, Error = P::Error>,
{
    type Cursor = P::Cursor;
    type Output = Q::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        self.parser
            .parse(cursor)
            .flat_map(|_, rest| (self.next)().parse(rest))
    }
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<F, Q>(self, next: F) -> Then<Self, F>
    where
        F: Fn() -> Q,
        Q: Parser<'code, Cursor = Self::Cursor, Error = Self::Error>,
    {
        Then::new(self, next)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Then parser
pub fn then<'code, P, F, Q>(parser: P, next: F) -> Then<P, F>
where
    P: Parser<'code>,
    F: Fn() -> Q,
    Q: Parser<'code, Cursor = P::Cursor, Error = P::Error>,
{
    Then::new(parser, next)
}
