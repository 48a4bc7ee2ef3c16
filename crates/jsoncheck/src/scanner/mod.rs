//! Byte cursor over the input buffer plus the lexical helpers the grammar
//! consumers are built from.
//!
//! The scanner is the only mutable state in a validation call: a borrowed
//! byte slice and a position index. The position never decreases, and every
//! helper bounds-checks before reading, so `0 <= pos <= len` holds at every
//! observable point.
//!
//! Whitespace is never skipped implicitly: `expect_byte` and `expect_literal`
//! match at the current position exactly, and callers apply
//! [`Scanner::skip_whitespace`] before values and around structural
//! punctuation.

/// Read-only cursor over an immutable byte buffer.
pub(crate) struct Scanner<'src> {
    data: &'src [u8],
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(data: &'src [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The byte at the current position, without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consumes and returns the byte at the current position.
    #[inline]
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// True iff the whole buffer has been consumed.
    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.data.len()
    }

    /// Advances past zero or more of the four JSON whitespace bytes: space,
    /// tab, line feed, carriage return. Always succeeds.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Consumes `byte` if it is at the current position. On mismatch the
    /// position is unchanged.
    #[inline]
    pub(crate) fn expect_byte(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes `literal` if the remaining buffer starts with it,
    /// byte-for-byte and case-sensitive. On mismatch the position is
    /// unchanged; no partial match is consumed.
    pub(crate) fn expect_literal(&mut self, literal: &[u8]) -> bool {
        if self.data[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Advances while `pred` holds, returning how many bytes were consumed.
    pub(crate) fn skip_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if !pred(byte) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }
}

#[cfg(test)]
mod tests;
