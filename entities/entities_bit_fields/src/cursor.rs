//! Byte Cursor Module
//!
//! An owned byte buffer carrying a read position. The position supplies the
//! sub-range offset for the position-based codec operations, so a caller
//! walking a packet can address fields relative to wherever it currently
//! stands instead of tracking offsets by hand.

/// Cursor errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Position outside `[0, len]`
    PositionOutOfBounds { position: usize, len: usize },
    /// A `len`-byte window at the current position runs past the end
    WindowOutOfBounds {
        position: usize,
        window: usize,
        len: usize,
    },
}

/// A byte buffer with a read position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCursor {
    data: Vec<u8>,
    position: usize,
}

impl ByteCursor {
    /// Create a new cursor at position 0.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, position: 0 }
    }

    /// Current position, in bytes from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move to an absolute position. A position equal to the length is
    /// allowed (nothing remaining).
    pub fn set_position(&mut self, position: usize) -> Result<(), CursorError> {
        if position > self.data.len() {
            return Err(CursorError::PositionOutOfBounds {
                position,
                len: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Move the position forward by `count` bytes.
    pub fn advance(&mut self, count: usize) -> Result<(), CursorError> {
        match self.position.checked_add(count) {
            Some(next) if next <= self.data.len() => {
                self.position = next;
                Ok(())
            }
            _ => Err(CursorError::PositionOutOfBounds {
                position: self.position.saturating_add(count),
                len: self.data.len(),
            }),
        }
    }

    /// Bytes between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// The whole underlying buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The `len`-byte sub-range starting at the current position.
    pub fn view(&self, len: usize) -> Result<&[u8], CursorError> {
        match self.position.checked_add(len) {
            Some(end) if end <= self.data.len() => Ok(&self.data[self.position..end]),
            _ => Err(CursorError::WindowOutOfBounds {
                position: self.position,
                window: len,
                len: self.data.len(),
            }),
        }
    }

    /// Consume the cursor and return the buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_starts_at_zero() {
        let cursor = ByteCursor::new(vec![1, 2, 3]);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_set_position() {
        let mut cursor = ByteCursor::new(vec![1, 2, 3]);
        cursor.set_position(2).unwrap();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 1);
        // Position == len is the exhausted cursor, still valid.
        cursor.set_position(3).unwrap();
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(
            cursor.set_position(4),
            Err(CursorError::PositionOutOfBounds { position: 4, len: 3 })
        );
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance() {
        let mut cursor = ByteCursor::new(vec![0; 5]);
        cursor.advance(2).unwrap();
        cursor.advance(3).unwrap();
        assert_eq!(cursor.position(), 5);
        assert!(cursor.advance(1).is_err());
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_view() {
        let mut cursor = ByteCursor::new(vec![10, 20, 30, 40]);
        cursor.set_position(1).unwrap();
        assert_eq!(cursor.view(2).unwrap(), &[20, 30]);
        assert_eq!(cursor.view(3).unwrap(), &[20, 30, 40]);
        assert!(matches!(
            cursor.view(4),
            Err(CursorError::WindowOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_into_inner() {
        let cursor = ByteCursor::new(vec![7, 8]);
        assert_eq!(cursor.into_inner(), vec![7, 8]);
    }
}
