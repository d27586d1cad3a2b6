use crate::atomic::Atomic;
use crate::error::Location;
use std::fmt;

/// Generic cursor trait for parser combinators
///
/// A cursor is a position in an immutable sequence of elements. Parsers never
/// mutate a cursor; advancing produces a new one, so any earlier cursor stays
/// valid and can be handed to an alternative parser to backtrack.
pub trait Cursor<'code>: Copy + PartialEq + fmt::Debug {
    /// The type of elements this cursor iterates over
    type Element: Atomic;

    /// Get the element at the current cursor position
    ///
    /// Returns `None` if the cursor is positioned at the end of the sequence
    fn value(&self) -> Option<Self::Element>;

    /// Advance the cursor to the next element
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Get the current position in the sequence
    ///
    /// For end-of-sequence cursors this is the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the sequence
    fn eos(&self) -> bool {
        self.value().is_none()
    }

    /// Line and offset of the current position, for error reporting
    fn location(&self) -> Location;

    /// Whether `self` walks the same source as `other` and sits at or after it
    fn is_suffix_of(&self, other: &Self) -> bool;
}
