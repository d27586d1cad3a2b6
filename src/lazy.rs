use crate::parser::{Parsed, Parser};

/// Parser whose inner parser is built by a thunk at every invocation
///
/// `or`, `then` and `fallback_to` already take thunks; `lazy` covers the
/// other places where a recursive grammar needs to name itself, such as the
/// element of a `rep` or `rep_sep`.
#[derive(Clone)]
pub struct Lazy<F> {
    build: F,
}

impl<F> Lazy<F> {
    pub fn new(build: F) -> Self {
        Lazy { build }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        (self.build)().parse(cursor)
    }
}

/// Defer building a parser until it runs
pub fn lazy<'code, F, P>(build: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::{BoxedExt, BoxedParser};
    use crate::cursor::Cursor;
    use crate::cursors::{ByteCursor, StrCursor};
    use crate::error::LeafError;
    use crate::leaf::{is_atom, tag};
    use crate::map::MapExt;
    use crate::rep::{RepExt, rep};
    use crate::then::ThenExt;
    use crate::then_skip::ThenSkipExt;
    use std::cell::Cell;

    type Count<'code> = BoxedParser<'code, StrCursor<'code>, usize, LeafError>;

    /// Number of parenthesized groups in a sequence, nested ones included
    fn groups<'code>() -> Count<'code> {
        lazy(group)
            .rep()
            .map(|sizes: Vec<usize>| sizes.into_iter().sum())
            .boxed()
    }

    fn group<'code>() -> Count<'code> {
        tag("(")
            .then(groups)
            .then_skip(tag(")"))
            .map(|inner: usize| inner + 1)
            .boxed()
    }

    #[test]
    fn test_lazy_basic() {
        let lazy_parser = lazy(|| is_atom(b'a'));

        let (output, remaining) = lazy_parser
            .parse(ByteCursor::new(b"aaaa"))
            .into_result()
            .unwrap();
        assert_eq!(output, b'a');
        assert_eq!(remaining.position(), 1);
    }

    #[test]
    fn test_lazy_with_rep() {
        let lazy_parser = lazy(|| rep(is_atom(b'a')));

        let (output, remaining) = lazy_parser
            .parse(ByteCursor::new(b"aaaa"))
            .into_result()
            .unwrap();
        assert_eq!(output.len(), 4);
        assert_eq!(remaining.position(), 4);
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let built = Cell::new(0);
        let lazy_parser = lazy(|| {
            built.set(built.get() + 1);
            is_atom(b'x')
        });
        assert_eq!(built.get(), 0);

        let input = ByteCursor::new(b"xyz");
        assert!(lazy_parser.parse(input).is_success());
        assert!(lazy_parser.parse(input).is_success());
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_lazy_breaks_recursion_in_rep() {
        let (count, rest) = groups().parse(StrCursor::new("(()())()x")).into_result().unwrap();
        assert_eq!(count, 4);
        assert_eq!(rest.remaining(), "x");
    }
}
