use crate::parser::{Parsed, Parser};

/// Parser combinator that runs a parser, then a second one whose value is
/// discarded, keeping the first parser's value
///
/// Fails if either parser fails.
#[derive(Clone)]
pub struct ThenSkip<P, S> {
    parser: P,
    skipped: S,
}

impl<P, S> ThenSkip<P, S> {
    pub fn new(parser: P, skipped: S) -> Self {
        ThenSkip { parser, skipped }
    }
}

impl<'code, P, S> Parser<'code> for ThenSkip<P, S>
where
    P: Parser<'code>,
    S: Parser<'code, Cursor = P::Cursor, Error = P::Error>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        self.parser
            .parse(cursor)
            .flat_map(|value, rest| self.skipped.parse(rest).map(|_, _| value))
    }
}

/// Extension trait to add .then_skip() method support for parsers
pub trait ThenSkipExt<'code>: Parser<'code> + Sized {
    fn then_skip<S>(self, skipped: S) -> ThenSkip<Self, S>
    where
        S: Parser<'code, Cursor = Self::Cursor, Error = Self::Error>,
    {
        ThenSkip::new(self, skipped)
    }
}

/// Implement ThenSkipExt for all parsers
impl<'code, P> ThenSkipExt<'code> for P where P: Parser<'code> {}
