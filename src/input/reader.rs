//! Line framing over a blocking byte stream.
//!
//! Each call to [`LineReader::next_line`] issues exactly one `read` into a fixed buffer
//! and treats whatever came back as one line. Nothing is carried over between calls:
//! a short read is never stitched together with the next one.
//!
//! The last byte of every read is assumed to be the line terminator and is dropped,
//! even when the read did not end in `\n`. Input that arrives without a trailing
//! newline therefore loses its final character.

use crate::error::{PagerError, Result};
use log::trace;
use std::io::Read;

/// Size of the read buffer (glibc `BUFSIZ`). The longest usable line is one byte shorter.
pub const BUFFER_CAPACITY: usize = 8192;

/// Reads one command line per call from an input stream.
pub struct LineReader<R> {
    source: R,
    buffer: Box<[u8]>,
}

impl<R: Read> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_capacity(source, BUFFER_CAPACITY)
    }

    /// Create a reader with a custom buffer size (at least one byte).
    pub fn with_capacity(source: R, capacity: usize) -> Self {
        Self {
            source,
            buffer: vec![0; capacity.max(1)].into_boxed_slice(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Read the next line and return its payload, without the final byte.
    ///
    /// Fails with [`PagerError::InputClosed`] on end of input,
    /// [`PagerError::ReadFailed`] when the stream errors, and
    /// [`PagerError::InputTooLong`] when the read filled the entire buffer, whatever it
    /// contains.
    pub fn next_line(&mut self) -> Result<&[u8]> {
        let bytes_read = self
            .source
            .read(&mut self.buffer)
            .map_err(PagerError::read_failed)?;
        trace!("read {} bytes from input", bytes_read);

        if bytes_read == 0 {
            return Err(PagerError::InputClosed);
        }
        if bytes_read == self.buffer.len() {
            return Err(PagerError::InputTooLong);
        }

        Ok(&self.buffer[..bytes_read - 1])
    }
}
