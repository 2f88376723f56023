//! Lookahead buffer over a [`ByteSource`].
//!
//! Triggers have no fixed length and several are tried, in order, against
//! the same unread input. The buffer keeps every byte it has pulled until a
//! match or a single-character read consumes it, so a failed comparison
//! never loses data. It only pulls as many bytes as the current question
//! needs.

use std::io;

use crate::source::ByteSource;
use crate::utf8::{self, Utf8Unit};

/// Unread bytes taken from a source, plus the source itself.
#[derive(Debug)]
pub struct LookaheadBuffer<S> {
    source: S,
    buf: Vec<u8>,
    /// Bytes consumed so far; used for diagnostics.
    offset: usize,
}

impl<S: ByteSource> LookaheadBuffer<S> {
    /// Start with an empty buffer.
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: Vec::with_capacity(16),
            offset: 0,
        }
    }

    /// Pull one byte into the buffer. Returns false when the source is dry.
    fn refill(&mut self) -> io::Result<bool> {
        match self.source.next_byte()? {
            Some(b) => {
                self.buf.push(b);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether the input is exhausted. Refills at most once.
    pub fn at_end(&mut self) -> io::Result<bool> {
        if self.buf.is_empty() {
            self.refill()?;
        }
        Ok(self.buf.is_empty())
    }

    /// The next byte without consuming it, or `None` at end of input.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.buf.is_empty() {
            self.refill()?;
        }
        Ok(self.buf.first().copied())
    }

    /// Discard the next `n` bytes, reading them first if needed.
    ///
    /// Stops early if the source runs out.
    pub fn consume(&mut self, n: usize) -> io::Result<()> {
        while self.buf.len() < n {
            if !self.refill()? {
                break;
            }
        }
        let n = n.min(self.buf.len());
        self.buf.drain(..n);
        self.offset += n;
        Ok(())
    }

    /// Consume `lit` if the input starts with it.
    ///
    /// On a mismatch nothing is consumed; bytes read while comparing stay
    /// buffered for the next attempt.
    pub fn try_consume_literal(&mut self, lit: &[u8]) -> io::Result<bool> {
        for (i, &expected) in lit.iter().enumerate() {
            if self.buf.len() <= i && !self.refill()? {
                return Ok(false);
            }
            if self.buf[i] != expected {
                return Ok(false);
            }
        }
        self.consume(lit.len())?;
        Ok(true)
    }

    /// Remove one UTF-8 character from the front of the input.
    ///
    /// The length comes from the leading byte alone. Returns `None` at end
    /// of input; a sequence cut short by the end of input is returned short.
    pub fn take_unit(&mut self) -> io::Result<Option<Utf8Unit>> {
        let Some(lead) = self.peek()? else {
            return Ok(None);
        };
        let want = utf8::sequence_len(lead);
        while self.buf.len() < want {
            if !self.refill()? {
                break;
            }
        }
        let (bytes, end) = utf8::decode_one_at(&self.buf, 0);
        let unit = Utf8Unit::from_slice(bytes);
        self.buf.drain(..end);
        self.offset += end;
        Ok(Some(unit))
    }

    /// Number of bytes consumed since the start of input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes read from the source but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }
}
