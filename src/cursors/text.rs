use crate::cursor::Cursor;
use crate::error::Location;

/// Cursor over a `&str`, stepping one `char` at a time
///
/// Positions are byte offsets into the source and always sit on a char
/// boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StrCursor<'code> {
    text: &'code str,
    position: usize,
}

impl<'code> StrCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        StrCursor { text, position: 0 }
    }

    /// The whole text this cursor walks
    pub fn source(&self) -> &'code str {
        self.text
    }

    /// The unconsumed suffix of the source
    pub fn remaining(&self) -> &'code str {
        &self.text[self.position..]
    }

    /// Skip `len` bytes of the remaining text
    ///
    /// `len` must land on a char boundary, which holds for the length of any
    /// prefix match against `remaining()`.
    pub(crate) fn skip_bytes(self, len: usize) -> Self {
        StrCursor {
            text: self.text,
            position: (self.position + len).min(self.text.len()),
        }
    }
}

impl<'code> Cursor<'code> for StrCursor<'code> {
    type Element = char;

    fn value(&self) -> Option<Self::Element> {
        self.remaining().chars().next()
    }

    fn next(self) -> Self {
        match self.value() {
            Some(ch) => self.skip_bytes(ch.len_utf8()),
            None => self,
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn location(&self) -> Location {
        Location::scan(self.text.char_indices(), self.position)
    }

    fn is_suffix_of(&self, other: &Self) -> bool {
        std::ptr::eq(self.text, other.text) && self.position >= other.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multibyte_stepping() {
        let cursor = StrCursor::new("héllo");

        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some('é'));
        assert_eq!(cursor.position(), 1);

        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some('l'));
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.remaining(), "llo");
    }

    #[test]
    fn test_end_of_input() {
        let cursor = StrCursor::new("a").next();

        assert!(cursor.eos());
        assert_eq!(cursor.remaining(), "");
        assert_eq!(cursor.next(), cursor);
    }

    #[test]
    fn test_location_multiline() {
        let text = "line1\nline2";
        let mut cursor = StrCursor::new(text);
        for _ in 0..8 {
            cursor = cursor.next();
        }

        assert_eq!(cursor.value(), Some('n'));
        let loc = cursor.location();
        assert_eq!(loc.line, 2);
        assert_eq!(loc.offset, 2);
    }

    #[test]
    fn test_skip_bytes_clamps() {
        let cursor = StrCursor::new("abc").skip_bytes(10);
        assert_eq!(cursor.position(), 3);
        assert!(cursor.eos());
    }
}
