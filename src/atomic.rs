use std::fmt;

/// Trait for the elements a cursor walks over
///
/// Implemented here for `u8` and `char`. Token-stream grammars implement it
/// for their own token type; the defaults are enough unless the token stream
/// carries line breaks that should show up in error locations.
pub trait Atomic: Copy + PartialEq + fmt::Debug {
    /// Whether this element ends a line
    fn is_newline(&self) -> bool {
        false
    }

    /// Render the element for error messages
    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

impl Atomic for u8 {
    fn is_newline(&self) -> bool {
        *self == b'\n'
    }

    fn describe(&self) -> String {
        if self.is_ascii_graphic() {
            format!("0x{:02X} ('{}')", self, *self as char)
        } else {
            format!("0x{:02X}", self)
        }
    }
}

impl Atomic for char {
    fn is_newline(&self) -> bool {
        *self == '\n'
    }
}
