use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::Location;

/// Cursor over a slice of atomic elements (bytes, chars, tokens)
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AtomicCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return AtomicCursor::EndOfFile { data };
        }
        AtomicCursor::Valid { data, position: 0 }
    }

    /// The whole slice this cursor walks
    pub fn source(&self) -> &'code [T] {
        match self {
            AtomicCursor::Valid { data, .. } => data,
            AtomicCursor::EndOfFile { data } => data,
        }
    }

    /// The unconsumed suffix of the source
    ///
    /// Empty when the position lies past the end of the source.
    pub fn remaining(&self) -> &'code [T] {
        self.source().get(self.position()..).unwrap_or(&[])
    }
}

impl<'code, T: Atomic> Cursor<'code> for AtomicCursor<'code, T> {
    type Element = T;

    fn value(&self) -> Option<Self::Element> {
        match self {
            AtomicCursor::Valid { data, position } => data.get(*position).copied(),
            AtomicCursor::EndOfFile { .. } => None,
        }
    }

    fn next(self) -> Self {
        match self {
            AtomicCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    AtomicCursor::EndOfFile { data }
                } else {
                    AtomicCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            AtomicCursor::EndOfFile { data } => AtomicCursor::EndOfFile { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { position, .. } => *position,
            AtomicCursor::EndOfFile { data } => data.len(),
        }
    }

    fn location(&self) -> Location {
        Location::scan(self.source().iter().copied().enumerate(), self.position())
    }

    fn is_suffix_of(&self, other: &Self) -> bool {
        std::ptr::eq(self.source(), other.source()) && self.position() >= other.position()
    }
}
