//! Bounds-checked reader over a borrowed byte slice.

use crate::core::WireError;

/// Sequential reader over a byte slice.
///
/// ```
/// use tls_extensions::wire::WireReader;
///
/// let mut reader = WireReader::new(&[0x00, 0x0b, 0x01]);
/// assert_eq!(reader.read_u16().unwrap(), 0x000b);
/// assert_eq!(reader.read_u8().unwrap(), 0x01);
/// assert!(reader.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True when every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed bytes, without advancing.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn ensure(&self, needed: usize) -> Result<(), WireError> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(WireError::Truncated { needed, remaining });
        }
        Ok(())
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        self.ensure(1)?;
        let value = self.buf[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Read a big-endian u16.
    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        self.ensure(2)?;
        let value = u16::from_be_bytes([self.buf[self.pos], self.buf[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    /// Read exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        self.ensure(len)?;
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Discard `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<(), WireError> {
        self.read_bytes(len).map(|_| ())
    }

    /// Split off the next `len` bytes as an independent reader.
    ///
    /// The returned reader cannot see anything past its own region.
    pub fn sub_reader(&mut self, len: usize) -> Result<WireReader<'a>, WireError> {
        self.read_bytes(len).map(WireReader::new)
    }

    /// Read a one-byte length, then split off that many bytes.
    pub fn read_u8_prefixed(&mut self) -> Result<WireReader<'a>, WireError> {
        let start = self.pos;
        let len = self.read_u8()? as usize;
        self.sub_reader(len).inspect_err(|_| self.pos = start)
    }

    /// Read a two-byte length, then split off that many bytes.
    pub fn read_u16_prefixed(&mut self) -> Result<WireReader<'a>, WireError> {
        let start = self.pos;
        let len = self.read_u16()? as usize;
        self.sub_reader(len).inspect_err(|_| self.pos = start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integers() {
        let data = hex::decode("01ff010b").unwrap();
        let mut reader = WireReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u8().unwrap(), 0xff);
        assert_eq!(reader.read_u16().unwrap(), 0x010b);
        assert!(reader.is_empty());
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn test_truncated_u16() {
        let mut reader = WireReader::new(&[0x01]);
        let err = reader.read_u16().unwrap_err();
        assert_eq!(
            err,
            WireError::Truncated {
                needed: 2,
                remaining: 1
            }
        );
        // Failed read does not advance
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn test_read_bytes_bounds() {
        let mut reader = WireReader::new(&[1, 2, 3]);
        assert_eq!(reader.read_bytes(2).unwrap(), &[1, 2]);
        assert!(reader.read_bytes(2).is_err());
        assert_eq!(reader.read_bytes(1).unwrap(), &[3]);
    }

    #[test]
    fn test_sub_reader_is_isolated() {
        let mut reader = WireReader::new(&[0xaa, 0xbb, 0xcc]);
        let mut sub = reader.sub_reader(1).unwrap();

        assert_eq!(sub.read_u8().unwrap(), 0xaa);
        assert!(sub.read_u8().is_err());
        assert_eq!(reader.rest(), &[0xbb, 0xcc]);
    }

    #[test]
    fn test_prefixed_truncated_restores_position() {
        // Declares 3 bytes, only 1 present
        let mut reader = WireReader::new(&[0x03, 0x00]);
        let err = reader.read_u8_prefixed().unwrap_err();
        assert!(matches!(err, WireError::Truncated { needed: 3, remaining: 1 }));
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_u16_prefixed() {
        let data = hex::decode("0002abcd01").unwrap();
        let mut reader = WireReader::new(&data);
        let sub = reader.read_u16_prefixed().unwrap();
        assert_eq!(sub.rest(), &[0xab, 0xcd]);
        assert_eq!(reader.read_u8().unwrap(), 0x01);
    }
}
