/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors returned by the byte reader
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum ZByteIoError {
    /// Not enough bytes in the stream.
    ///
    /// Fields are `(position, requested, remaining)`
    NotEnoughBytes(usize, usize, usize)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(position, requested, remaining) => {
                writeln!(
                    f,
                    "Not enough bytes at position {position}, requested {requested} but only {remaining} remain"
                )
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ZByteIoError {}

/// An encapsulation of a byte stream
///
/// The lifetime parameter is from the buffer the reader was
/// created from, slices handed out by the reader borrow from it
/// and not from the reader itself.
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Number of bytes left in the stream
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    /// Return true if at least `num` bytes remain in the stream
    pub const fn has(&self, num: usize) -> bool {
        self.remaining() >= num
    }
    /// Return true if there are no more bytes in the stream
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    pub const fn get_position(&self) -> usize {
        self.position
    }

    const fn not_enough(&self, requested: usize) -> ZByteIoError {
        ZByteIoError::NotEnoughBytes(self.position, requested, self.remaining())
    }

    /// Return a reference to the next `num` bytes and advance
    /// the stream past them
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], ZByteIoError> {
        let end = self
            .position
            .checked_add(num)
            .ok_or_else(|| self.not_enough(num))?;

        match self.stream.get(self.position..end) {
            Some(bytes) => {
                self.position = end;
                Ok(bytes)
            }
            None => Err(self.not_enough(num))
        }
    }

    /// Read a fixed number of bytes into an array
    fn get_fixed_bytes_or_err<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        byte_store.copy_from_slice(self.get_as_ref(N)?);
        Ok(byte_store)
    }

    /// Read a big endian u32
    fn get_u32_be_err(&mut self) -> Result<u32, ZByteIoError> {
        self.get_fixed_bytes_or_err().map(u32::from_be_bytes)
    }
    /// Read a big endian u32, returning zero if the
    /// stream is exhausted
    pub fn get_u32_be(&mut self) -> u32 {
        self.get_u32_be_err().unwrap_or(0)
    }
    /// Read a single byte, returning zero if the stream is exhausted
    pub fn get_u8(&mut self) -> u8 {
        self.get_fixed_bytes_or_err::<1>().map_or(0, |[byte]| byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_big_endian_fields() {
        let data = [0, 0, 0, 13, b'I', b'H', b'D', b'R', 7];
        let mut reader = ZByteReader::new(&data);

        assert_eq!(reader.get_u32_be_err().unwrap(), 13);
        assert_eq!(reader.get_as_ref(4).unwrap(), b"IHDR");
        assert_eq!(reader.get_u8(), 7);
        assert!(reader.eof());
        // exhausted streams return zero for the non-error variants
        assert_eq!(reader.get_u32_be(), 0);
    }

    #[test]
    fn get_as_ref_reports_shortfall() {
        let data = [1, 2, 3];
        let mut reader = ZByteReader::new(&data);
        assert_eq!(reader.get_u8(), 1);

        let err = reader.get_as_ref(5).unwrap_err();
        assert_eq!(err, ZByteIoError::NotEnoughBytes(1, 5, 2));
        // failed reads do not move the stream
        assert_eq!(reader.get_position(), 1);
        assert!(reader.has(2));
        assert!(!reader.has(3));
    }

    #[test]
    fn short_u32_is_an_error() {
        let data = [0, 1];
        let mut reader = ZByteReader::new(&data);

        assert_eq!(
            reader.get_u32_be_err(),
            Err(ZByteIoError::NotEnoughBytes(0, 4, 2))
        );
        assert_eq!(reader.remaining(), 2);
    }
}
