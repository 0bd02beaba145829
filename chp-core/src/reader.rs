//! Bytecode cursor

use crate::error::{FormatError, Result};

/// Forward-only cursor over one chip's bytes.
///
/// Positions are relative to the chip start; `base` is only used to report
/// absolute offsets in errors.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8], base: usize) -> Self {
        Self { data, pos: 0, base }
    }

    /// Cursor starting at `pos`
    pub fn at(data: &'a [u8], pos: usize, base: usize) -> Self {
        Self { data, pos, base }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn peek_u8(&self) -> Result<u8> {
        self.data.get(self.pos).copied().ok_or_else(|| self.eof())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let byte = self.peek_u8()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Big-endian 16-bit value
    pub fn read_u16_be(&mut self) -> Result<u16> {
        if self.remaining() < 2 {
            return Err(self.eof());
        }
        let value = u16::from_be_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(value)
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(self.eof());
        }
        self.pos += n;
        Ok(())
    }

    fn eof(&self) -> FormatError {
        FormatError::UnexpectedEof {
            offset: self.base + self.pos,
        }
    }
}
