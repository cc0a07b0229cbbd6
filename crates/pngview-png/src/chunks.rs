/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Splitting a png stream into chunks
//!
//! Format of a chunk is `length - chunk type - [data] - crc`, the length
//! and crc are big endian u32's.
use log::trace;
use pngview_core::bytestream::ZByteReader;

use crate::constants::CHUNK_OVERHEAD;
use crate::enums::PngChunkType;
use crate::error::PngDecodeErrors;

/// A single chunk, borrowing its payload from the stream
#[derive(Copy, Clone, Debug)]
pub struct PngChunk<'a> {
    pub length:     u32,
    pub chunk:      [u8; 4],
    pub chunk_type: PngChunkType,
    pub data:       &'a [u8],
    /// The trailing crc, stored as read
    pub crc:        u32,
    /// Position of the length field, relative to the first byte
    /// after the signature
    pub offset:     usize
}

impl<'a> PngChunk<'a> {
    /// Chunk type as text, non-ascii types are replaced by `XXXX`
    pub fn name(&self) -> &str {
        core::str::from_utf8(&self.chunk).unwrap_or("XXXX")
    }
}

/// Iterator over the chunks of a png stream
///
/// The stream passed in must start right after the 8 byte signature.
/// Iteration ends after the IEND chunk has been returned, at the end of
/// the stream, or after the first error.
pub struct ChunkReader<'a> {
    stream:   ZByteReader<'a>,
    finished: bool
}

impl<'a> ChunkReader<'a> {
    pub const fn new(data: &'a [u8]) -> ChunkReader<'a> {
        ChunkReader {
            stream:   ZByteReader::new(data),
            finished: false
        }
    }

    fn read_chunk(&mut self) -> Result<PngChunk<'a>, PngDecodeErrors> {
        let offset = self.stream.get_position();

        let truncated = |needed: usize, remaining: usize| PngDecodeErrors::TruncatedStream {
            offset,
            needed,
            remaining
        };
        let remaining = self.stream.remaining();

        if !self.stream.has(8) {
            return Err(truncated(CHUNK_OVERHEAD, remaining));
        }
        let length = self.stream.get_u32_be();
        let chunk: [u8; 4] = self.stream.get_u32_be().to_be_bytes();

        let needed = (length as usize).saturating_add(CHUNK_OVERHEAD);

        if !self.stream.has(needed - 8) {
            return Err(truncated(needed, remaining));
        }
        let data = self
            .stream
            .get_as_ref(length as usize)
            .map_err(|_| truncated(needed, remaining))?;
        let crc = self.stream.get_u32_be();

        let chunk_type = PngChunkType::from_bytes(&chunk);

        if chunk_type == PngChunkType::Unknown {
            trace!(
                "Encountered unknown chunk {:?}",
                String::from_utf8_lossy(&chunk)
            );
            trace!("Length of chunk {}", length);
        }

        Ok(PngChunk {
            length,
            chunk,
            chunk_type,
            data,
            crc,
            offset
        })
    }
}

impl<'a> Iterator for ChunkReader<'a> {
    type Item = Result<PngChunk<'a>, PngDecodeErrors>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.stream.eof() {
            return None;
        }
        let chunk = self.read_chunk();

        match &chunk {
            Ok(c) if c.chunk_type == PngChunkType::IEND => {
                if !self.stream.eof() {
                    trace!(
                        "{} bytes after IEND chunk, ignoring them",
                        self.stream.remaining()
                    );
                }
                self.finished = true;
            }
            Err(_) => self.finished = true,
            _ => ()
        }
        Some(chunk)
    }
}

/// Split a post-signature png stream into chunks
///
/// Stops after the IEND chunk, or at the end of the stream
pub fn parse_chunks(data: &[u8]) -> Result<Vec<PngChunk<'_>>, PngDecodeErrors> {
    ChunkReader::new(data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(name: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        out.extend_from_slice(name);
        out.extend_from_slice(payload);
        out.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        out
    }

    #[test]
    fn splits_records_in_order() {
        let mut stream = chunk(b"IHDR", &[0; 13]);
        stream.extend(chunk(b"tEXt", b"hello"));
        stream.extend(chunk(b"IDAT", &[1, 2, 3]));

        let chunks = parse_chunks(&stream).unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chunk_type, PngChunkType::IHDR);
        assert_eq!(chunks[1].chunk_type, PngChunkType::Unknown);
        assert_eq!(chunks[1].name(), "tEXt");
        assert_eq!(chunks[2].data, &[1, 2, 3]);
        assert_eq!(chunks[2].crc, 0xDEAD_BEEF);
        // offsets advance by length + 12
        assert_eq!(chunks[1].offset, 13 + 12);
        assert_eq!(chunks[2].offset, 13 + 12 + 5 + 12);
    }

    #[test]
    fn stops_at_iend() {
        let mut stream = chunk(b"IHDR", &[0; 13]);
        stream.extend(chunk(b"IEND", &[]));
        stream.extend(chunk(b"IDAT", &[9; 4]));
        // garbage that would fail to parse
        stream.extend([0xFF; 3]);

        let chunks = parse_chunks(&stream).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].chunk_type, PngChunkType::IEND);
    }

    #[test]
    fn truncated_payload() {
        let mut stream = chunk(b"IHDR", &[0; 13]);
        let mut idat = chunk(b"IDAT", &[7; 10]);
        // drop crc and two bytes of payload
        idat.truncate(idat.len() - 6);
        stream.extend(idat);

        let err = parse_chunks(&stream).unwrap_err();
        match err {
            PngDecodeErrors::TruncatedStream {
                offset,
                needed,
                remaining
            } => {
                assert_eq!(offset, 25);
                assert_eq!(needed, 22);
                assert_eq!(remaining, 16);
            }
            e => panic!("unexpected error {e:?}")
        }
    }

    #[test]
    fn truncated_length_field() {
        let stream = [0, 0, 0];
        assert!(matches!(
            parse_chunks(&stream),
            Err(PngDecodeErrors::TruncatedStream { remaining: 3, .. })
        ));
    }

    #[test]
    fn huge_length_does_not_overflow() {
        let mut stream = vec![0xFF, 0xFF, 0xFF, 0xFF];
        stream.extend_from_slice(b"IDAT");
        stream.extend_from_slice(&[0; 8]);

        assert!(matches!(
            parse_chunks(&stream),
            Err(PngDecodeErrors::TruncatedStream { .. })
        ));
    }

    #[test]
    fn empty_stream_has_no_chunks() {
        assert!(parse_chunks(&[]).unwrap().is_empty());
    }
}
