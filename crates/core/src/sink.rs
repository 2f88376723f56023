//! Incremental UTF-8 output.

use std::io::{self, Write};

use crate::utf8::{self, Utf8Unit};

/// Writes converted text as soon as each piece is decided.
///
/// No buffering is added here; whatever buffering the wrapped writer has is
/// the only one.
#[derive(Debug)]
pub struct OutputSink<W> {
    writer: W,
    written: usize,
}

impl<W: Write> OutputSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write a code point. Values with no UTF-8 form are dropped.
    pub fn write_char(&mut self, ch: char) -> io::Result<()> {
        self.write_unit(utf8::encode(ch as u32))
    }

    /// Write an encoded unit as-is, well-formed or not.
    pub fn write_unit(&mut self, unit: Utf8Unit) -> io::Result<()> {
        self.write_bytes(unit.as_bytes())
    }

    /// Write literal text.
    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }

    /// Flush the wrapped writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Give back the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_bytes_written() {
        let mut sink = OutputSink::new(Vec::new());
        sink.write_char('α').unwrap();
        sink.write_str("(error:nul)").unwrap();
        sink.write_unit(Utf8Unit::from_slice(&[0xC3, b'A'])).unwrap();
        assert_eq!(sink.written(), 2 + 11 + 2);
        let out = sink.into_inner();
        assert_eq!(&out[..2], "α".as_bytes());
        assert_eq!(&out[13..], &[0xC3, b'A']);
    }
}
