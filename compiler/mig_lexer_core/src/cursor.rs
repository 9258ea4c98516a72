//! Bounds-checked cursor over an in-memory byte buffer.
//!
//! The cursor is the only mutable state of a parse: a read offset into a
//! borrowed buffer. It moves forward through [`consume`](Cursor::consume)
//! and back through [`rewind`](Cursor::rewind) or
//! [`restore`](Cursor::restore).
//!
//! # End of Input
//!
//! Reads that need more bytes than remain fail with [`EndOfInput`] and leave
//! the offset unchanged. `EndOfInput` is not a parse error by itself; each
//! scanner decides what running out of input means for its construct.

use thiserror::Error;

/// Fewer bytes remain than a read asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("unexpected end of input")]
pub struct EndOfInput;

/// Saved cursor position for speculative scanning.
///
/// Only meaningful for the cursor (or a copy of the cursor) that produced
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Checkpoint {
    pos: usize,
}

impl Checkpoint {
    /// Byte offset captured by this checkpoint.
    #[inline]
    pub fn pos(self) -> usize {
        self.pos
    }
}

/// Read cursor over a byte buffer.
///
/// The cursor is [`Copy`], so a whole cursor can also serve as a snapshot.
///
/// # Invariant
///
/// `0 <= pos <= buf.len()` at all times.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at offset 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the whole buffer.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    /// Bytes from the current offset to the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The next `n` bytes, without advancing.
    #[inline]
    pub fn peek(&self, n: usize) -> Result<&'a [u8], EndOfInput> {
        self.remaining().get(..n).ok_or(EndOfInput)
    }

    /// The next `n` bytes, advancing past them.
    ///
    /// On [`EndOfInput`] the offset is unchanged.
    #[inline]
    pub fn consume(&mut self, n: usize) -> Result<&'a [u8], EndOfInput> {
        let bytes = self.peek(n)?;
        self.pos += n;
        Ok(bytes)
    }

    /// The next byte, advancing past it.
    #[inline]
    pub fn consume_byte(&mut self) -> Result<u8, EndOfInput> {
        let byte = *self.remaining().first().ok_or(EndOfInput)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Advance past `n` bytes the caller has already inspected.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` bytes remain.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        assert!(
            n <= self.buf.len() - self.pos,
            "cannot advance {n} bytes at offset {} of {}",
            self.pos,
            self.buf.len()
        );
        self.pos += n;
    }

    /// Step back `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics if this would move before offset 0. Callers may only rewind
    /// bytes they consumed themselves.
    #[inline]
    pub fn rewind(&mut self, n: usize) {
        assert!(n <= self.pos, "cannot rewind {n} bytes from offset {}", self.pos);
        self.pos -= n;
    }

    /// Save the current offset.
    #[inline]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { pos: self.pos }
    }

    /// Return to a saved offset.
    #[inline]
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        debug_assert!(
            checkpoint.pos <= self.buf.len(),
            "checkpoint {} is outside a buffer of {} bytes",
            checkpoint.pos,
            self.buf.len()
        );
        self.pos = checkpoint.pos;
    }

    /// Bytes consumed since `checkpoint`.
    #[inline]
    pub fn since(&self, checkpoint: Checkpoint) -> &'a [u8] {
        self.slice(checkpoint.pos, self.pos)
    }

    /// Bytes in `start..end`.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len()`; offsets come from this cursor.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start..end]
    }

    /// Advance while `pred` holds for the next byte, returning the bytes
    /// passed over (possibly none). Stops at end of input.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        let len = self
            .remaining()
            .iter()
            .take_while(|&&b| pred(b))
            .count();
        self.pos += len;
        &self.buf[start..self.pos]
    }

    /// Advance to the next occurrence of `byte` using SIMD-accelerated
    /// search, returning the bytes passed over.
    ///
    /// The cursor stops *at* the found byte. If `byte` does not occur again
    /// the offset is unchanged and [`EndOfInput`] is returned.
    #[inline]
    pub fn eat_until(&mut self, byte: u8) -> Result<&'a [u8], EndOfInput> {
        let offset = memchr::memchr(byte, self.remaining()).ok_or(EndOfInput)?;
        self.consume(offset)
    }
}

#[cfg(test)]
mod tests;
