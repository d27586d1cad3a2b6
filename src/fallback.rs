use crate::or::Or;
use crate::parser::{Parsed, Parser};
use crate::result::ParseResult;

/// Parser that succeeds with a default value when the inner parser fails
///
/// On failure nothing is consumed: the default comes back with the original
/// cursor as remainder.
#[derive(Clone)]
pub struct Fallback<P, T> {
    parser: P,
    default: T,
}

impl<P, T> Fallback<P, T> {
    pub fn new(parser: P, default: T) -> Self {
        Fallback { parser, default }
    }
}

impl<'code, P, T> Parser<'code> for Fallback<P, T>
where
    P: Parser<'code, Output = T>,
    T: Clone,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        self.parser
            .parse(cursor)
            .or_else(|_| ParseResult::success(self.default.clone(), cursor))
    }
}

/// Extension trait to add .fallback() and .fallback_to() method support for parsers
pub trait FallbackExt<'code>: Parser<'code> + Sized {
    /// Succeed with `default` instead of failing
    fn fallback(self, default: Self::Output) -> Fallback<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        Fallback::new(self, default)
    }

    /// Run the parser built by `alternative` from the original cursor instead
    /// of failing
    ///
    /// This is `or` under another name.
    fn fallback_to<F, Q>(self, alternative: F) -> Or<Self, F>
    where
        F: Fn() -> Q,
        Q: Parser<'code, Cursor = Self::Cursor, Output = Self::Output, Error = Self::Error>,
    {
        Or::new(self, alternative)
    }
}

/// Implement FallbackExt for all parsers
impl<'code, P> FallbackExt<'code> for P where P: Parser<'code> {}
