//! Byte cursor for XML input navigation

use crate::error::Pos;

/// Cursor over XML input with line and column tracking
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Current byte without consuming it
    pub(crate) fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Byte `ahead` positions past the current one
    pub(crate) fn peek(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.pos.saturating_add(ahead)).copied()
    }

    pub(crate) fn starts_with(&self, pattern: &[u8]) -> bool {
        self.remaining().starts_with(pattern)
    }

    pub(crate) fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    pub(crate) fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b) = self.current() {
            if matches!(b, b' ' | b'\t' | b'\n' | b'\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    pub(crate) const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub(crate) const fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> &'a [u8] {
        self.input.get(self.pos..).unwrap_or_default()
    }

    /// Bytes between `start` and the current position
    pub(crate) fn slice_from(&self, start: usize) -> &'a [u8] {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_basic() {
        let mut cursor = Cursor::new(b"<a>");
        assert_eq!(cursor.current(), Some(b'<'));
        assert_eq!(cursor.peek(1), Some(b'a'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(b'a'));
        assert!(cursor.starts_with(b"a>"));
    }

    #[test]
    fn test_cursor_tracks_lines() {
        let mut cursor = Cursor::new(b"  \n\t<a>");
        cursor.skip_whitespace();
        assert_eq!(cursor.current(), Some(b'<'));
        assert_eq!(cursor.position(), Pos::new(4, 2, 2));
    }

    #[test]
    fn test_cursor_eof() {
        let mut cursor = Cursor::new(b"ab");
        cursor.advance_by(5);
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.remaining(), b"");
    }

    #[test]
    fn test_cursor_slice() {
        let mut cursor = Cursor::new(b"hello world");
        let start = cursor.pos();
        cursor.advance_by(5);
        assert_eq!(cursor.slice_from(start), b"hello");
    }
}
