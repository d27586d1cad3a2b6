use crate::atomic::Atomic;
use crate::cursor::Cursor;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Errors that can flow through the combinators
///
/// The combinator layer never looks inside an error. All it relies on is a
/// stable numeric code, and two errors are considered the same exactly when
/// their codes match.
///
/// # Example for downstream crates
///
/// ```rust
/// use parsimony::error::ParseError;
///
/// #[derive(Debug, thiserror::Error)]
/// enum GrammarError {
///     #[error("missing closing bracket")]
///     UnclosedBracket,
///     #[error("unknown keyword `{0}`")]
///     UnknownKeyword(String),
/// }
///
/// impl ParseError for GrammarError {
///     fn code(&self) -> u32 {
///         match self {
///             GrammarError::UnclosedBracket => 10,
///             GrammarError::UnknownKeyword(_) => 11,
///         }
///     }
/// }
///
/// let a = GrammarError::UnknownKeyword("fn".into());
/// let b = GrammarError::UnknownKeyword("let".into());
/// assert!(a.same_code(&b));
/// ```
pub trait ParseError: std::error::Error {
    /// Stable code identifying the kind of failure
    fn code(&self) -> u32;

    fn same_code(&self, other: &dyn ParseError) -> bool {
        self.code() == other.code()
    }
}

/// Human readable position of a cursor
///
/// `offset` counts source units from the start of the line (bytes for text,
/// elements for slices) instead of columns, since column width depends on
/// encoding and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Absolute position in the source
    pub position: usize,
    /// 1-based line number
    pub line: usize,
    pub offset: usize,
}

impl Location {
    /// Count lines in `elements` up to `position`
    ///
    /// `elements` yields each element with its position in the source.
    pub fn scan<T: Atomic>(
        elements: impl IntoIterator<Item = (usize, T)>,
        position: usize,
    ) -> Self {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in elements {
            if i >= position {
                break;
            }
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        Location {
            position,
            line,
            offset: position - line_start,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, offset {} (absolute position: {})",
            self.line, self.offset, self.position
        )
    }
}

/// Misuse of the parse result accessors or of forward declarations
///
/// These are logic errors in the calling code, not parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("tried to unwrap a failed parse result")]
    UnwrappedFailedResult,
    #[error("tried to take the error of a successful parse result")]
    ErrorFromSuccessfulResult,
    #[error("forward-declared parser was used before it was defined")]
    UndefinedForward,
    #[error("forward-declared parser was defined twice")]
    ForwardAlreadyDefined,
    #[error("forward-declared parser was used after its grammar was dropped")]
    DroppedForward,
}

impl ParseError for EngineError {
    fn code(&self) -> u32 {
        match self {
            EngineError::UnwrappedFailedResult => 1,
            EngineError::ErrorFromSuccessfulResult => 2,
            EngineError::UndefinedForward => 3,
            EngineError::ForwardAlreadyDefined => 4,
            EngineError::DroppedForward => 5,
        }
    }
}

/// Error produced by the bundled leaf parsers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeafError {
    #[error("unexpected end of input at {loc}")]
    EndOfInput { loc: Location },
    #[error("expected {expected}, found {found} at {loc}")]
    Unexpected {
        expected: Cow<'static, str>,
        found: String,
        loc: Location,
    },
    #[error("no match for pattern `{pattern}` at {loc}")]
    NoMatch { pattern: String, loc: Location },
    #[error("{message} at {loc}")]
    Rejected {
        message: Cow<'static, str>,
        loc: Location,
    },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl LeafError {
    pub fn end_of_input<'code>(at: &impl Cursor<'code>) -> Self {
        LeafError::EndOfInput { loc: at.location() }
    }

    pub fn unexpected<'code>(
        expected: impl Into<Cow<'static, str>>,
        found: impl Into<String>,
        at: &impl Cursor<'code>,
    ) -> Self {
        LeafError::Unexpected {
            expected: expected.into(),
            found: found.into(),
            loc: at.location(),
        }
    }

    /// Reject a value that parsed but is not acceptable, e.g. from `flat_map`
    pub fn rejected<'code>(message: impl Into<Cow<'static, str>>, at: &impl Cursor<'code>) -> Self {
        LeafError::Rejected {
            message: message.into(),
            loc: at.location(),
        }
    }

    /// Where the error happened, if it came from the input
    pub fn location(&self) -> Option<Location> {
        match self {
            LeafError::EndOfInput { loc }
            | LeafError::Unexpected { loc, .. }
            | LeafError::NoMatch { loc, .. }
            | LeafError::Rejected { loc, .. } => Some(*loc),
            LeafError::Engine(_) => None,
        }
    }
}

impl ParseError for LeafError {
    fn code(&self) -> u32 {
        match self {
            LeafError::EndOfInput { .. } => 1,
            LeafError::Unexpected { .. } => 2,
            LeafError::NoMatch { .. } => 3,
            LeafError::Rejected { .. } => 4,
            LeafError::Engine(e) => 100 + e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{ByteCursor, StrCursor};

    #[test]
    fn test_location_first_line() {
        let loc = Location::scan("hello".char_indices(), 3);
        assert_eq!(loc, Location { position: 3, line: 1, offset: 3 });
    }

    #[test]
    fn test_location_empty_source() {
        let loc = Location::scan("".char_indices(), 0);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.offset, 0);
    }

    #[test]
    fn test_location_display() {
        let cursor = ByteCursor::new(b"ab\ncd").next().next().next();
        let error = LeafError::end_of_input(&cursor);

        let display_str = error.to_string();
        assert!(display_str.contains("unexpected end of input"));
        assert!(display_str.contains("line 2, offset 0"));
    }

    #[test]
    fn test_unexpected_display() {
        let cursor = StrCursor::new("xyz");
        let error = LeafError::unexpected("'a'", "'x'", &cursor);

        assert_eq!(
            error.to_string(),
            "expected 'a', found 'x' at line 1, offset 0 (absolute position: 0)"
        );
        assert_eq!(error.location().map(|loc| loc.position), Some(0));
    }

    #[test]
    fn test_equality_is_by_code() {
        let first = LeafError::unexpected("'a'", "'x'", &StrCursor::new("x"));
        let second = LeafError::unexpected("digit", "'y'", &StrCursor::new("zzy").next().next());
        let third = LeafError::end_of_input(&StrCursor::new(""));

        assert!(first.same_code(&second));
        assert!(!first.same_code(&third));
    }

    #[test]
    fn test_engine_codes_are_distinct() {
        let wrapped = LeafError::from(EngineError::UndefinedForward);

        assert_eq!(wrapped.code(), 103);
        assert_eq!(LeafError::from(EngineError::DroppedForward).code(), 105);
        assert_eq!(wrapped.location(), None);
        assert_eq!(wrapped.to_string(), EngineError::UndefinedForward.to_string());
        assert!(
            !EngineError::UnwrappedFailedResult.same_code(&EngineError::ErrorFromSuccessfulResult)
        );
    }
}
