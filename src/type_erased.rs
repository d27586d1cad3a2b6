use crate::parser::{Parsed, Parser};

/// Parser combinator that replaces the output of a parser with `()`
///
/// Useful for lining up parsers with unrelated output types, e.g. as the
/// discarded side of a `then`.
#[derive(Clone)]
pub struct TypeErased<P> {
    parser: P,
}

impl<P> TypeErased<P> {
    pub fn new(parser: P) -> Self {
        TypeErased { parser }
    }
}

impl<'code, P> Parser<'code> for TypeErased<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = ();
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        self.parser.parse(cursor).map(|_, _| ())
    }
}

/// Extension trait to add .type_erased() method support for parsers
pub trait TypeErasedExt<'code>: Parser<'code> + Sized {
    fn type_erased(self) -> TypeErased<Self> {
        TypeErased::new(self)
    }
}

/// Implement TypeErasedExt for all parsers
impl<'code, P> TypeErasedExt<'code> for P where P: Parser<'code> {}
