use crate::boxed::BoxedParser;
use crate::cursor::Cursor;
use crate::error::{EngineError, ParseError};
use crate::parser::{Parsed, Parser};
use crate::result::ParseResult;
use std::sync::{Arc, OnceLock, Weak};

type Slot<'code, C, O, E> = OnceLock<BoxedParser<'code, C, O, E>>;

enum Handle<'code, C, O, E> {
    Owned(Arc<Slot<'code, C, O, E>>),
    Unowned(Weak<Slot<'code, C, O, E>>),
}

/// A parser that is declared first and defined later
///
/// `declare` returns the owning handle. Clones are non-owning references to
/// the same definition slot, meant to be used inside the parser that
/// eventually defines it, so a self-referential grammar does not keep itself
/// alive. Once the owning handle is dropped, parsing through a clone fails
/// with `EngineError::DroppedForward`; to share a finished grammar, move the
/// owning handle into a `BoxedParser`.
///
/// Parsing before `define` fails with `EngineError::UndefinedForward`. Both
/// errors are converted into the grammar's error type.
pub struct Forward<'code, C, O, E> {
    handle: Handle<'code, C, O, E>,
}

impl<'code, C, O, E> Forward<'code, C, O, E>
where
    C: Cursor<'code>,
    E: ParseError,
{
    pub fn declare() -> Self {
        Forward {
            handle: Handle::Owned(Arc::new(OnceLock::new())),
        }
    }

    /// Fill in the definition; a second definition is rejected
    pub fn define<P>(&self, parser: P) -> Result<(), EngineError>
    where
        P: Parser<'code, Cursor = C, Output = O, Error = E> + Send + Sync + 'code,
    {
        self.with_slot(|slot| {
            slot.set(BoxedParser::new(parser))
                .map_err(|_| EngineError::ForwardAlreadyDefined)
        })
        .unwrap_or(Err(EngineError::DroppedForward))
    }

    pub fn is_defined(&self) -> bool {
        self.with_slot(|slot| slot.get().is_some()).unwrap_or(false)
    }

    /// Whether this handle keeps the definition alive
    pub fn is_owner(&self) -> bool {
        matches!(self.handle, Handle::Owned(_))
    }
}

impl<'code, C, O, E> Forward<'code, C, O, E> {
    /// Run `f` on the slot, or return `None` if the grammar is gone
    fn with_slot<R>(&self, f: impl FnOnce(&Slot<'code, C, O, E>) -> R) -> Option<R> {
        match &self.handle {
            Handle::Owned(slot) => Some(f(slot.as_ref())),
            Handle::Unowned(slot) => slot.upgrade().map(|slot| f(slot.as_ref())),
        }
    }
}

impl<'code, C, O, E> Clone for Forward<'code, C, O, E> {
    fn clone(&self) -> Self {
        let slot = match &self.handle {
            Handle::Owned(slot) => Arc::downgrade(slot),
            Handle::Unowned(slot) => Weak::clone(slot),
        };
        Forward {
            handle: Handle::Unowned(slot),
        }
    }
}

impl<'code, C, O, E> Parser<'code> for Forward<'code, C, O, E>
where
    C: Cursor<'code>,
    E: ParseError + From<EngineError>,
{
    type Cursor = C;
    type Output = O;
    type Error = E;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        match self.with_slot(|slot| slot.get().map(|parser| parser.parse(cursor))) {
            Some(Some(result)) => result,
            Some(None) => ParseResult::fail(E::from(EngineError::UndefinedForward)),
            None => ParseResult::fail(E::from(EngineError::DroppedForward)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxed::BoxedExt;
    use crate::cursors::StrCursor;
    use crate::error::LeafError;
    use crate::leaf::tag;
    use crate::map::MapExt;
    use crate::or::OrExt;
    use crate::parser::parser_fn;
    use crate::then::ThenExt;
    use std::sync::atomic::{AtomicBool, Ordering};

    type Text = Forward<'static, StrCursor<'static>, &'static str, LeafError>;

    /// Sets its flag when dropped
    struct DropFlag(Arc<AtomicBool>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_undefined_forward_fails() {
        let forward: Text = Forward::declare();

        let error = forward.parse(StrCursor::new("a")).error().unwrap();
        assert_eq!(error, LeafError::Engine(EngineError::UndefinedForward));
        assert!(!forward.is_defined());
    }

    #[test]
    fn test_define_once() {
        let forward = Forward::declare();

        assert_eq!(forward.define(tag("a")), Ok(()));
        assert_eq!(forward.define(tag("b")), Err(EngineError::ForwardAlreadyDefined));

        // The first definition stays in place
        assert!(forward.parse(StrCursor::new("a")).is_success());
        assert!(forward.parse(StrCursor::new("b")).is_failed());
    }

    #[test]
    fn test_define_through_clone() {
        let forward: Text = Forward::declare();
        let handle = forward.clone();

        assert!(forward.is_owner());
        assert!(!handle.is_owner());
        assert_eq!(handle.define(tag("a")), Ok(()));
        assert!(forward.is_defined());
    }

    #[test]
    fn test_self_reference() {
        // "!" repeated any number of times before a "."
        let bangs: Forward<'_, StrCursor<'_>, usize, LeafError> = Forward::declare();
        let inner = bangs.clone();
        bangs
            .define(tag(".").map(|_| 0).or(move || {
                let inner = inner.clone();
                tag("!").then(move || inner.clone()).map(|count: usize| count + 1)
            }))
            .unwrap();

        assert_eq!(bangs.parse(StrCursor::new("!!!.")).unwrap().unwrap(), 3);
        assert!(bangs.parse(StrCursor::new("!!")).is_failed());
    }

    #[test]
    fn test_self_referential_grammar_is_freed() {
        let dropped = Arc::new(AtomicBool::new(false));
        {
            let flag = DropFlag(Arc::clone(&dropped));
            let grammar: Text = Forward::declare();
            let inner = grammar.clone();
            let stop = parser_fn(move |cursor: StrCursor<'static>| {
                let _flag = &flag;
                tag(".").parse(cursor)
            });
            grammar
                .define(stop.or(move || {
                    let inner = inner.clone();
                    tag("!").then(move || inner.clone())
                }))
                .unwrap();

            assert_eq!(grammar.parse(StrCursor::new("!!.")).unwrap().unwrap(), ".");
            assert!(!dropped.load(Ordering::SeqCst));
        }

        assert!(dropped.load(Ordering::SeqCst));
    }

    #[test]
    fn test_clone_after_owner_dropped() {
        let grammar: Text = Forward::declare();
        grammar.define(tag("a")).unwrap();
        let handle = grammar.clone();
        assert!(handle.parse(StrCursor::new("a")).is_success());

        drop(grammar);

        let error = handle.parse(StrCursor::new("a")).error().unwrap();
        assert_eq!(error, LeafError::Engine(EngineError::DroppedForward));
        assert!(!handle.is_defined());
        assert_eq!(handle.define(tag("b")), Err(EngineError::DroppedForward));
    }

    #[test]
    fn test_boxed_owner_keeps_grammar_alive() {
        let grammar: Text = Forward::declare();
        grammar.define(tag("a")).unwrap();

        let shared = grammar.boxed();
        let copy = shared.clone();
        drop(shared);

        assert!(copy.parse(StrCursor::new("a")).is_success());
    }
}
