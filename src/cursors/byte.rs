use crate::AtomicCursor;

/// A specialized cursor for byte data (u8)
pub type ByteCursor<'code> = AtomicCursor<'code, u8>;
