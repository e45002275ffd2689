//! Appending writer with back-filled length prefixes.

use crate::core::WireError;

/// Growable output buffer for handshake encoding.
#[derive(Debug, Clone, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer, returning its buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Append a big-endian u16.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Drop everything written after `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    /// Write a one-byte length prefix around whatever `body` writes.
    pub fn with_u8_length<E, F>(&mut self, body: F) -> Result<(), E>
    where
        E: From<WireError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.with_length(1, u8::MAX as usize, body)
    }

    /// Write a two-byte length prefix around whatever `body` writes.
    pub fn with_u16_length<E, F>(&mut self, body: F) -> Result<(), E>
    where
        E: From<WireError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.with_length(2, u16::MAX as usize, body)
    }

    fn with_length<E, F>(&mut self, width: usize, max: usize, body: F) -> Result<(), E>
    where
        E: From<WireError>,
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        let mark = self.buf.len();
        self.buf.resize(mark + width, 0);

        if let Err(err) = body(self) {
            self.buf.truncate(mark);
            return Err(err);
        }

        let length = self.buf.len() - mark - width;
        if length > max {
            self.buf.truncate(mark);
            return Err(WireError::LengthOverflow { length, max }.into());
        }

        // Big-endian, `width` low bytes of `length`
        let be = (length as u64).to_be_bytes();
        self.buf[mark..mark + width].copy_from_slice(&be[8 - width..]);
        Ok(())
    }
}
