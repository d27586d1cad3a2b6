//! Primitive parsers that consume elements directly from a cursor

use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::StrCursor;
use crate::error::LeafError;
use crate::parser::{Parsed, Parser};
use crate::result::ParseResult;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that consumes and returns a single element
pub struct AnyAtom<C> {
    _cursor: PhantomData<fn(C)>,
}

impl<C> Clone for AnyAtom<C> {
    fn clone(&self) -> Self {
        any()
    }
}

impl<'code, C> Parser<'code> for AnyAtom<C>
where
    C: Cursor<'code>,
{
    type Cursor = C;
    type Output = C::Element;
    type Error = LeafError;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        match cursor.value() {
            Some(element) => ParseResult::success(element, cursor.next()),
            None => ParseResult::fail(LeafError::end_of_input(&cursor)),
        }
    }
}

/// Convenience function to create an AnyAtom parser
pub fn any<C>() -> AnyAtom<C> {
    AnyAtom {
        _cursor: PhantomData,
    }
}

/// Parser that matches one element accepted by a predicate
#[derive(Clone)]
pub struct Satisfy<C, F> {
    expected: Cow<'static, str>,
    predicate: F,
    _cursor: PhantomData<fn(C)>,
}

impl<'code, C, F> Parser<'code> for Satisfy<C, F>
where
    C: Cursor<'code>,
    F: Fn(&C::Element) -> bool,
{
    type Cursor = C;
    type Output = C::Element;
    type Error = LeafError;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        match cursor.value() {
            Some(element) if (self.predicate)(&element) => {
                ParseResult::success(element, cursor.next())
            }
            Some(element) => ParseResult::fail(LeafError::unexpected(
                self.expected.clone(),
                element.describe(),
                &cursor,
            )),
            None => ParseResult::fail(LeafError::end_of_input(&cursor)),
        }
    }
}

/// Create a parser for one element matching `predicate`
///
/// `expected` names what the predicate accepts, for error messages.
pub fn satisfy<'code, C, F>(expected: impl Into<Cow<'static, str>>, predicate: F) -> Satisfy<C, F>
where
    C: Cursor<'code>,
    F: Fn(&C::Element) -> bool,
{
    Satisfy {
        expected: expected.into(),
        predicate,
        _cursor: PhantomData,
    }
}

/// Parser that matches a specific element
#[derive(Clone)]
pub struct IsAtom<C, T> {
    expected: T,
    _cursor: PhantomData<fn(C)>,
}

impl<'code, C, T> Parser<'code> for IsAtom<C, T>
where
    C: Cursor<'code, Element = T>,
    T: Atomic,
{
    type Cursor = C;
    type Output = T;
    type Error = LeafError;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        match cursor.value() {
            Some(element) if element == self.expected => {
                ParseResult::success(element, cursor.next())
            }
            Some(element) => ParseResult::fail(LeafError::unexpected(
                self.expected.describe(),
                element.describe(),
                &cursor,
            )),
            None => ParseResult::fail(LeafError::end_of_input(&cursor)),
        }
    }
}

/// Convenience function to create an IsAtom parser
pub fn is_atom<'code, C, T>(expected: T) -> IsAtom<C, T>
where
    C: Cursor<'code, Element = T>,
    T: Atomic,
{
    IsAtom {
        expected,
        _cursor: PhantomData,
    }
}

/// Parser that matches an exact run of elements
#[derive(Clone)]
pub struct Literal<C, T> {
    expected: Vec<T>,
    _cursor: PhantomData<fn(C)>,
}

impl<'code, C, T> Parser<'code> for Literal<C, T>
where
    C: Cursor<'code, Element = T>,
    T: Atomic,
{
    type Cursor = C;
    type Output = Vec<T>;
    type Error = LeafError;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        let mut current = cursor;

        for expected in &self.expected {
            match current.value() {
                Some(found) if found == *expected => current = current.next(),
                Some(found) => {
                    return ParseResult::fail(LeafError::unexpected(
                        expected.describe(),
                        found.describe(),
                        &current,
                    ));
                }
                None => return ParseResult::fail(LeafError::end_of_input(&current)),
            }
        }

        ParseResult::success(self.expected.clone(), current)
    }
}

/// Convenience function to create a Literal parser
pub fn literal<'code, C, T>(expected: &[T]) -> Literal<C, T>
where
    C: Cursor<'code, Element = T>,
    T: Atomic,
{
    Literal {
        expected: expected.to_vec(),
        _cursor: PhantomData,
    }
}

/// Parser that matches an exact string on text input
///
/// Yields the matched slice of the source rather than a copy.
#[derive(Clone)]
pub struct Tag {
    expected: Cow<'static, str>,
}

impl<'code> Parser<'code> for Tag {
    type Cursor = StrCursor<'code>;
    type Output = &'code str;
    type Error = LeafError;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        let remaining = cursor.remaining();
        let len = self.expected.len();

        if remaining.starts_with(&*self.expected) {
            return ParseResult::success(&remaining[..len], cursor.skip_bytes(len));
        }
        if remaining.is_empty() {
            return ParseResult::fail(LeafError::end_of_input(&cursor));
        }

        let found: String = remaining.chars().take(self.expected.chars().count()).collect();
        ParseResult::fail(LeafError::unexpected(
            format!("{:?}", self.expected),
            format!("{:?}", found),
            &cursor,
        ))
    }
}

/// Convenience function to create a Tag parser
pub fn tag(expected: impl Into<Cow<'static, str>>) -> Tag {
    Tag {
        expected: expected.into(),
    }
}
