use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};

/// Cursor over an in-memory byte slice. All reads are big-endian and bounds
/// checked; reading past the end is an `UnexpectedEof` carrying the offset.
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the next unread byte, for error context.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| Error::unexpected_eof(self.pos))?;
        let taken = &self.data[self.pos..end];
        self.pos = end;
        Ok(taken)
    }

    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.bytes(1)?[0])
    }

    pub fn i8(&mut self) -> Result<i8> {
        Ok(self.u8()? as i8)
    }

    pub fn i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.bytes(2)?))
    }

    pub fn u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.bytes(2)?))
    }

    pub fn i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.bytes(4)?))
    }

    pub fn i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.bytes(8)?))
    }

    pub fn f32(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.bytes(4)?))
    }

    pub fn f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.bytes(8)?))
    }

    /// A u16 length followed by that many raw bytes. Used for both names and
    /// String payloads; the bytes are kept verbatim.
    pub fn short_string(&mut self) -> Result<Vec<u8>> {
        let len = self.u16()? as usize;
        Ok(self.bytes(len)?.to_vec())
    }
}
