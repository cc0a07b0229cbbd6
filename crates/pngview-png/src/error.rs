/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during png decoding
use core::fmt::{Debug, Display, Formatter};

/// Errors possible when decoding a png image
///
/// Every error is terminal for the decode that raised it, no partial
/// image is ever returned.
pub enum PngDecodeErrors {
    /// The stream does not start with the png signature,
    /// carries the bytes found instead (at most 8)
    SignatureMismatch(Vec<u8>),
    /// A chunk claims more bytes than the stream has
    TruncatedStream {
        /// Offset of the chunk, relative to the first byte after the signature
        offset:    usize,
        /// Bytes the chunk needs, including length, type and crc
        needed:    usize,
        /// Bytes left in the stream at `offset`
        remaining: usize
    },
    /// No IHDR chunk before the first other chunk.
    ///
    /// Carries the chunk type found instead, `None` if the stream had no chunks
    MissingHeader { found: Option<[u8; 4]> },
    /// The IHDR chunk is present but not decodable
    MalformedHeader(String),
    /// The color type is not one this decoder supports
    InvalidColorMode(u8),
    /// Bit depth other than 8
    UnsupportedBitDepth(u8),
    /// Adam7 interlaced images
    UnsupportedInterlace,
    /// Image dimensions larger than configured limits
    LimitExceeded {
        dimension: &'static str,
        value:     usize,
        limit:     usize
    },
    /// Indexed image without a PLTE chunk
    MissingPalette,
    /// The PLTE chunk is present but not decodable
    MalformedPalette(String),
    /// A pixel refers to a palette entry past the end of the palette
    PaletteIndexOutOfRange { index: u8, entries: usize },
    /// The inflate step failed
    DecompressionError(String),
    /// A scanline starts with a filter byte outside 0..=4
    UnsupportedFilterType { row: usize, filter: u8 },
    /// The decompressed stream ended before all scanlines were read
    ReconstructionOverrun {
        row:      usize,
        expected: usize,
        found:    usize
    },
    /// A pixel group is shorter than the color mode requires
    InvalidPixelBytes { expected: usize, found: usize }
}

impl Debug for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SignatureMismatch(found) => {
                writeln!(f, "Bad PNG signature, not a png, found {found:?}")
            }
            Self::TruncatedStream {
                offset,
                needed,
                remaining
            } => writeln!(
                f,
                "Truncated chunk at offset {offset}, chunk needs {needed} bytes but only {remaining} remain"
            ),
            Self::MissingHeader { found: Some(chunk) } => writeln!(
                f,
                "First chunk is {}, expected IHDR",
                String::from_utf8_lossy(chunk)
            ),
            Self::MissingHeader { found: None } => {
                writeln!(f, "No chunks present, expected IHDR")
            }
            Self::MalformedHeader(reason) => writeln!(f, "Malformed IHDR: {reason}"),
            Self::InvalidColorMode(code) => {
                writeln!(f, "Unsupported or invalid color type {code}")
            }
            Self::UnsupportedBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {depth}, only 8 bit images are supported")
            }
            Self::UnsupportedInterlace => {
                writeln!(f, "Adam7 interlaced images are not supported")
            }
            Self::LimitExceeded {
                dimension,
                value,
                limit
            } => writeln!(
                f,
                "Image {dimension} {value}, larger than maximum configured {dimension} {limit}, aborting"
            ),
            Self::MissingPalette => writeln!(f, "Indexed image without a PLTE chunk"),
            Self::MalformedPalette(reason) => writeln!(f, "Malformed PLTE: {reason}"),
            Self::PaletteIndexOutOfRange { index, entries } => writeln!(
                f,
                "Palette index {index} out of range, palette has {entries} entries"
            ),
            Self::DecompressionError(reason) => {
                writeln!(f, "Error decompressing image data: {reason}")
            }
            Self::UnsupportedFilterType { row, filter } => {
                writeln!(f, "Unknown filter type {filter} on row {row}")
            }
            Self::ReconstructionOverrun {
                row,
                expected,
                found
            } => writeln!(
                f,
                "Not enough pixel data for row {row}, expected {expected} bytes but found {found}"
            ),
            Self::InvalidPixelBytes { expected, found } => {
                writeln!(f, "Pixel needs {expected} bytes but only {found} remain")
            }
        }
    }
}

impl Display for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PngDecodeErrors {}
