//! # Parsimony - Parser Combinator Engine
//!
//! A small parser combinator engine built around two algebras: a result
//! algebra (`ParseResult`) and a combinator algebra over the `Parser` trait.
//!
//! Parsers are generic over the input they read (any `Cursor`), the value
//! they produce and the error they report. The library emphasizes:
//!
//! - **Zero panics**: misuse of the result accessors is reported as an `EngineError`
//! - **Immutable input**: cursors are `Copy`, so backtracking is just reusing a cursor
//! - **Lazy composition**: `or`, `then` and `fallback_to` take thunks, so grammars can recurse
//! - **Code-based errors**: errors compare by numeric code, never by content
//!
//! ```
//! use parsimony::{MapExt, OrExt, Parser, RepSepExt, StrCursor, satisfy, tag};
//!
//! let digit = satisfy("digit", |c: &char| c.is_ascii_digit()).map(|c: char| c.to_digit(10));
//! let list = digit.rep_sep(tag(","));
//!
//! let (values, rest) = list.parse(StrCursor::new("1,2,")).into_result().unwrap();
//! assert_eq!(values, vec![Some(1), Some(2)]);
//! assert_eq!(rest.remaining(), ",");
//!
//! let keyword = tag("let").or(|| tag("var"));
//! assert!(keyword.parse(StrCursor::new("var x")).is_success());
//! ```

pub mod atomic;
pub mod boxed;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod fallback;
pub mod flat_map;
pub mod forward;
pub mod lazy;
pub mod leaf;
pub mod map;
pub mod or;
pub mod parser;
#[cfg(feature = "regex")]
pub mod pattern;
pub mod rep;
pub mod rep_sep;
pub mod result;
pub mod then;
pub mod then_skip;
pub mod type_erased;

pub use atomic::Atomic;
pub use boxed::{BoxedExt, BoxedParser};
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, ByteCursor, StrCursor};
pub use error::{EngineError, LeafError, Location, ParseError};
pub use fallback::{Fallback, FallbackExt};
pub use flat_map::{FlatMap, FlatMapExt};
pub use forward::Forward;
pub use lazy::{Lazy, lazy};
pub use leaf::{AnyAtom, IsAtom, Literal, Satisfy, Tag, any, is_atom, literal, satisfy, tag};
pub use map::{Map, MapExt, map};
pub use or::{Or, OrExt, or};
pub use parser::{FnParser, Parsed, Parser, parser_fn};
#[cfg(feature = "regex")]
pub use pattern::{RegexParser, regex};
pub use rep::{Rep, RepExt, rep};
pub use rep_sep::{RepSep, RepSepExt, rep_sep};
pub use result::ParseResult;
pub use then::{Then, ThenExt, then};
pub use then_skip::{ThenSkip, ThenSkipExt};
pub use type_erased::{TypeErased, TypeErasedExt};
