//! Pull-based byte sources.

use std::io::{self, BufRead, ErrorKind};

/// Something that hands out input one byte at a time.
///
/// `Ok(None)` means the input is exhausted; it is not an error. Sources are
/// expected to keep returning `Ok(None)` once exhausted.
pub trait ByteSource {
    /// Produce the next byte, blocking until one is available.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;
}

/// [`ByteSource`] over any buffered reader (stdin lock, `&[u8]`, files).
///
/// The reader's own buffer decides how much is pulled from the OS; bytes
/// leave this source one at a time.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
}

impl<R: BufRead> ReadSource<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Give back the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => buf[0],
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.reader.consume(1);
            return Ok(Some(byte));
        }
    }
}
