use super::parser::{Parsed, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The alternative is given as a thunk and only built when the first parser
/// fails, so it may refer to a parser whose definition is still in progress.
/// Both branches start from the same cursor; when both fail, the error of the
/// alternative is the one returned.
#[derive(Clone)]
pub struct Or<P, F> {
    parser: P,
    alternative: F,
}

impl<P, F> Or<P, F> {
    pub fn new(parser: P, alternative: F) -> Self {
        Or {
            parser,
            alternative,
        }
    }
}

impl<'code, P, F, Q> Parser<'code> for Or<P, F>
where
    P: Parser<'code>,
    F: Fn() -> Q,
    Q: Parser<'code, Cursor = P::Cursor, Output = P::Output, Error = P::Error>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        self.parser
            .parse(cursor)
            .or_else(|_| (self.alternative)().parse(cursor))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<F, Q>(self, alternative: F) -> Or<Self, F>
    where
        F: Fn() -> Q,
        Q: Parser<'code, Cursor = Self::Cursor, Output = Self::Output, Error = Self::Error>,
    {
        Or::new(self, alternative)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P, F, Q>(parser: P, alternative: F) -> Or<P, F>
where
    P: Parser<'code>,
    F: Fn() -> Q,
    Q: Parser<'code, Cursor = P::Cursor, Output = P::Output, Error = P::Error>,
{
    Or::new(parser, alternative)
}
