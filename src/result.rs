use crate::error::{EngineError, ParseError};

/// Outcome of a single parse attempt
///
/// `Success` carries the produced value and the cursor at the unconsumed
/// remainder; `Fail` carries only the error. Combinators never match on these
/// variants themselves: everything they need is expressed through `map`,
/// `flat_map`, `or_else` and `ok`, so all case analysis lives in this module.
#[derive(Debug, Clone)]
#[must_use]
pub enum ParseResult<C, O, E> {
    Success { value: O, rest: C },
    Fail(E),
}

impl<C, O, E> ParseResult<C, O, E> {
    pub fn success(value: O, rest: C) -> Self {
        ParseResult::Success { value, rest }
    }

    pub fn fail(error: E) -> Self {
        ParseResult::Fail(error)
    }

    /// Replace a success value with `f(value, &rest)`, keeping the remainder
    pub fn map<U, F>(self, f: F) -> ParseResult<C, U, E>
    where
        F: FnOnce(O, &C) -> U,
    {
        match self {
            ParseResult::Success { value, rest } => {
                let value = f(value, &rest);
                ParseResult::Success { value, rest }
            }
            ParseResult::Fail(error) => ParseResult::Fail(error),
        }
    }

    /// Continue a success with `f(value, rest)` and return its outcome verbatim
    ///
    /// A failure short-circuits; `f` is not called.
    pub fn flat_map<U, F>(self, f: F) -> ParseResult<C, U, E>
    where
        F: FnOnce(O, C) -> ParseResult<C, U, E>,
    {
        match self {
            ParseResult::Success { value, rest } => f(value, rest),
            ParseResult::Fail(error) => ParseResult::Fail(error),
        }
    }

    /// Recover from a failure with `f(error)`; a success is returned unchanged
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            ParseResult::Success { value, rest } => ParseResult::Success { value, rest },
            ParseResult::Fail(error) => f(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ParseResult::Fail(_))
    }

    /// The success value
    pub fn unwrap(self) -> Result<O, EngineError> {
        match self {
            ParseResult::Success { value, .. } => Ok(value),
            ParseResult::Fail(_) => Err(EngineError::UnwrappedFailedResult),
        }
    }

    /// The success remainder
    pub fn rest(&self) -> Result<C, EngineError>
    where
        C: Clone,
    {
        match self {
            ParseResult::Success { rest, .. } => Ok(rest.clone()),
            ParseResult::Fail(_) => Err(EngineError::UnwrappedFailedResult),
        }
    }

    /// The failure error
    pub fn error(self) -> Result<E, EngineError> {
        match self {
            ParseResult::Success { .. } => Err(EngineError::ErrorFromSuccessfulResult),
            ParseResult::Fail(error) => Ok(error),
        }
    }

    /// Value and remainder of a success, dropping any error
    pub fn ok(self) -> Option<(O, C)> {
        match self {
            ParseResult::Success { value, rest } => Some((value, rest)),
            ParseResult::Fail(_) => None,
        }
    }

    pub fn into_result(self) -> Result<(O, C), E> {
        match self {
            ParseResult::Success { value, rest } => Ok((value, rest)),
            ParseResult::Fail(error) => Err(error),
        }
    }
}

impl<C, O, E> From<Result<(O, C), E>> for ParseResult<C, O, E> {
    fn from(result: Result<(O, C), E>) -> Self {
        match result {
            Ok((value, rest)) => ParseResult::Success { value, rest },
            Err(error) => ParseResult::Fail(error),
        }
    }
}

impl<C, O, E> PartialEq for ParseResult<C, O, E>
where
    C: PartialEq,
    O: PartialEq,
    E: ParseError,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                ParseResult::Success { value, rest },
                ParseResult::Success {
                    value: other_value,
                    rest: other_rest,
                },
            ) => value == other_value && rest == other_rest,
            (ParseResult::Fail(error), ParseResult::Fail(other_error)) => {
                error.same_code(other_error)
            }
            _ => false,
        }
    }
}
