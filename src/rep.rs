use crate::parser::{Parsed, Parser};
use crate::result::ParseResult;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. The remainder is the one left by the last successful
/// occurrence; whatever the final, failing attempt looked at is not consumed.
#[derive(Clone)]
pub struct Rep<P> {
    parser: P,
}

impl<P> Rep<P> {
    pub fn new(parser: P) -> Self {
        Rep { parser }
    }
}

impl<'code, P> Parser<'code> for Rep<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, mut cursor: Self::Cursor) -> Parsed<'code, Self> {
        let mut results = Vec::new();

        while let Some((value, rest)) = self.parser.parse(cursor).ok() {
            results.push(value);
            // A success that consumed nothing would repeat forever
            if rest == cursor {
                break;
            }
            cursor = rest;
        }

        ParseResult::success(results, cursor)
    }
}

/// Convenience function to create a Rep parser
pub fn rep<'code, P>(parser: P) -> Rep<P>
where
    P: Parser<'code>,
{
    Rep::new(parser)
}

/// Extension trait to add .rep() method support for parsers
pub trait RepExt<'code>: Parser<'code> + Sized {
    fn rep(self) -> Rep<Self> {
        Rep::new(self)
    }
}

/// Implement RepExt for all parsers
impl<'code, P> RepExt<'code> for P where P: Parser<'code> {}
