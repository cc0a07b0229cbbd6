/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

use crate::error::PngDecodeErrors;

/// Chunk types the decoder acts on, see table 5.3 of
/// the png spec, https://www.w3.org/TR/2003/REC-PNG-20031110/
///
/// Everything else is carried as `Unknown` and skipped
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    PLTE,
    IDAT,
    IEND,
    Unknown
}

impl PngChunkType {
    pub fn from_bytes(chunk: &[u8; 4]) -> PngChunkType {
        match chunk {
            b"IHDR" => PngChunkType::IHDR,
            b"PLTE" => PngChunkType::PLTE,
            b"IDAT" => PngChunkType::IDAT,
            b"IEND" => PngChunkType::IEND,
            _ => PngChunkType::Unknown
        }
    }
}

/// Per scanline filter types
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Average,
    Paeth,
    // First scanline, special
    PaethFirst,
    AvgFirst
}

impl FilterMethod {
    pub fn from_int(int: u8) -> Option<FilterMethod> {
        match int {
            0 => Some(FilterMethod::None),
            1 => Some(FilterMethod::Sub),
            2 => Some(FilterMethod::Up),
            3 => Some(FilterMethod::Average),
            4 => Some(FilterMethod::Paeth),
            _ => None
        }
    }
    /// Map a filter to its variant for the first scanline,
    /// where the row above is treated as zero
    pub const fn first_row(self) -> FilterMethod {
        match self {
            // up for the first row becomes a memcpy
            FilterMethod::Up => FilterMethod::None,
            FilterMethod::Average => FilterMethod::AvgFirst,
            FilterMethod::Paeth => FilterMethod::PaethFirst,
            other => other
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InterlaceMethod {
    Standard,
    Adam7
}

impl InterlaceMethod {
    pub fn from_int(int: u8) -> Option<InterlaceMethod> {
        match int {
            0 => Some(Self::Standard),
            1 => Some(Self::Adam7),
            _ => None
        }
    }
}

/// Color mode flags derived from the IHDR color type
///
/// Bit 0 of the color type signals a palette, bit 1 color
/// and bit 2 an alpha channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ColorMode {
    pub has_palette: bool,
    pub has_color:   bool,
    pub has_alpha:   bool
}

impl ColorMode {
    pub const RGB: ColorMode = ColorMode {
        has_palette: false,
        has_color:   true,
        has_alpha:   false
    };
    pub const RGBA: ColorMode = ColorMode {
        has_palette: false,
        has_color:   true,
        has_alpha:   true
    };
    pub const PALETTE: ColorMode = ColorMode {
        has_palette: true,
        has_color:   true,
        has_alpha:   false
    };

    /// Decompose a color type into its flags
    ///
    /// Returns `InvalidColorMode` if bits other than the three flag bits
    /// are set or the combination is not one of truecolor, truecolor with
    /// alpha or indexed color.
    pub fn from_code(code: u8) -> Result<ColorMode, PngDecodeErrors> {
        let has_palette = code & 1 != 0;
        let has_color = code & 2 != 0;
        let has_alpha = code & 4 != 0;

        if code & !0b111 != 0 {
            return Err(PngDecodeErrors::InvalidColorMode(code));
        }
        let mode = ColorMode {
            has_palette,
            has_color,
            has_alpha
        };
        match mode {
            ColorMode::RGB | ColorMode::RGBA | ColorMode::PALETTE => Ok(mode),
            // grayscale and the combinations png forbids
            _ => Err(PngDecodeErrors::InvalidColorMode(code))
        }
    }
    /// Number of bytes a single pixel occupies in a scanline
    pub const fn bytes_per_pixel(self) -> usize {
        if self.has_palette {
            1
        } else if self.has_alpha {
            4
        } else {
            3
        }
    }
    /// Color type byte this mode was derived from
    pub const fn code(self) -> u8 {
        (self.has_palette as u8) | ((self.has_color as u8) << 1) | ((self.has_alpha as u8) << 2)
    }
}
