use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{Parsed, Parser};
use std::sync::Arc;

/// Type-erased, shareable parser handle
///
/// Gives recursive grammar functions a nameable return type, so that
/// `fn expr() -> BoxedParser<..>` can refer to itself through a thunk such as
/// `|| expr()`. Cloning is cheap and shares the underlying parser, and the
/// handle can be shared between threads.
pub struct BoxedParser<'code, C, O, E> {
    inner: Arc<dyn Parser<'code, Cursor = C, Output = O, Error = E> + Send + Sync + 'code>,
}

impl<'code, C, O, E> BoxedParser<'code, C, O, E>
where
    C: Cursor<'code>,
    E: ParseError,
{
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O, Error = E> + Send + Sync + 'code,
    {
        BoxedParser {
            inner: Arc::new(parser),
        }
    }
}

impl<'code, C, O, E> Clone for BoxedParser<'code, C, O, E> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'code, C, O, E> Parser<'code> for BoxedParser<'code, C, O, E>
where
    C: Cursor<'code>,
    E: ParseError,
{
    type Cursor = C;
    type Output = O;
    type Error = E;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + Send + Sync + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Cursor, Self::Output, Self::Error> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + Send + Sync + 'code {}
