/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::info;
use pngview_core::bytestream::ZByteReader;
use pngview_core::options::DecoderOptions;

use crate::constants::{IHDR_LENGTH, MAX_PALETTE_ENTRIES};
use crate::enums::{ColorMode, InterlaceMethod};
use crate::error::PngDecodeErrors;

/// Image information carried by the IHDR chunk
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PngHeader {
    pub width:              usize,
    pub height:             usize,
    pub depth:              u8,
    /// Raw color type byte
    pub color_code:         u8,
    pub compression_method: u8,
    pub filter_method:      u8,
    pub interlace_method:   InterlaceMethod,
    /// Flags derived from `color_code`
    pub color:              ColorMode
}

impl PngHeader {
    /// Bytes per pixel in a scanline
    pub const fn bytes_per_pixel(&self) -> usize {
        self.color.bytes_per_pixel()
    }
    /// Bytes per scanline, excluding the filter byte
    pub const fn stride(&self) -> usize {
        self.width.saturating_mul(self.bytes_per_pixel())
    }
    /// Sizes derived from the dimensions
    ///
    /// Returns `(stride, inflated_size, pixel_count)`, `inflated_size`
    /// counts one filter byte per scanline. Fails with `MalformedHeader`
    /// if any of them does not fit a `usize`.
    pub fn checked_sizes(&self) -> Result<(usize, usize, usize), PngDecodeErrors> {
        let sizes = self.width.checked_mul(self.bytes_per_pixel()).and_then(|stride| {
            let inflated = stride.checked_add(1)?.checked_mul(self.height)?;
            let pixels = self.width.checked_mul(self.height)?;

            Some((stride, inflated, pixels))
        });

        sizes.ok_or_else(|| {
            PngDecodeErrors::MalformedHeader(format!(
                "Dimensions {}x{} overflow the addressable image size",
                self.width, self.height
            ))
        })
    }
}

/// Parse the IHDR payload
pub fn parse_ihdr(data: &[u8], options: &DecoderOptions) -> Result<PngHeader, PngDecodeErrors> {
    if data.len() != IHDR_LENGTH {
        return Err(PngDecodeErrors::MalformedHeader(format!(
            "IHDR length should be {IHDR_LENGTH} but is {}",
            data.len()
        )));
    }
    let mut stream = ZByteReader::new(data);

    let width = stream.get_u32_be() as usize;
    let height = stream.get_u32_be() as usize;

    if width == 0 || height == 0 {
        return Err(PngDecodeErrors::MalformedHeader(format!(
            "Width or height cannot be zero, found {width}x{height}"
        )));
    }

    if width > options.get_max_width() {
        return Err(PngDecodeErrors::LimitExceeded {
            dimension: "width",
            value:     width,
            limit:     options.get_max_width()
        });
    }

    if height > options.get_max_height() {
        return Err(PngDecodeErrors::LimitExceeded {
            dimension: "height",
            value:     height,
            limit:     options.get_max_height()
        });
    }

    let depth = stream.get_u8();
    let color_code = stream.get_u8();
    let compression_method = stream.get_u8();
    let filter_method = stream.get_u8();
    let interlace = stream.get_u8();

    let color = ColorMode::from_code(color_code)?;

    if depth != 8 {
        return Err(PngDecodeErrors::UnsupportedBitDepth(depth));
    }

    if compression_method != 0 {
        return Err(PngDecodeErrors::MalformedHeader(format!(
            "Unknown compression method {compression_method}"
        )));
    }

    if filter_method != 0 {
        return Err(PngDecodeErrors::MalformedHeader(format!(
            "Unknown filter method {filter_method}"
        )));
    }

    let interlace_method = match InterlaceMethod::from_int(interlace) {
        Some(InterlaceMethod::Standard) => InterlaceMethod::Standard,
        Some(InterlaceMethod::Adam7) => return Err(PngDecodeErrors::UnsupportedInterlace),
        None => {
            return Err(PngDecodeErrors::MalformedHeader(format!(
                "Unknown interlace method {interlace}"
            )))
        }
    };

    let header = PngHeader {
        width,
        height,
        depth,
        color_code,
        compression_method,
        filter_method,
        interlace_method,
        color
    };
    // limits may be raised to usize::MAX, sizes must still be addressable
    header.checked_sizes()?;

    info!("Width: {}", width);
    info!("Height: {}", height);
    info!("Color type: {:?}", color);
    info!("Depth: {:?}", depth);
    info!("Interlace: {:?}", interlace_method);

    Ok(header)
}

/// Palette entries from a PLTE chunk, indexed by position
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Palette {
    entries: Vec<[u8; 3]>
}

impl Palette {
    /// Entry at `index`, `None` if the index is past the palette end
    pub fn get(&self, index: u8) -> Option<[u8; 3]> {
        self.entries.get(usize::from(index)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse the PLTE payload into RGB triples
pub fn parse_plte(data: &[u8]) -> Result<Palette, PngDecodeErrors> {
    if data.len() % 3 != 0 {
        return Err(PngDecodeErrors::MalformedPalette(format!(
            "PLTE length {} is not a multiple of 3",
            data.len()
        )));
    }
    let entries = data.len() / 3;

    if entries == 0 || entries > MAX_PALETTE_ENTRIES {
        return Err(PngDecodeErrors::MalformedPalette(format!(
            "PLTE has {entries} entries, expected between 1 and {MAX_PALETTE_ENTRIES}"
        )));
    }

    let entries = data
        .chunks_exact(3)
        .map(|pal_chunk| [pal_chunk[0], pal_chunk[1], pal_chunk[2]])
        .collect();

    Ok(Palette { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ihdr(width: u32, height: u32, depth: u8, color: u8, interlace: u8) -> Vec<u8> {
        let mut out = Vec::with_capacity(13);
        out.extend_from_slice(&width.to_be_bytes());
        out.extend_from_slice(&height.to_be_bytes());
        out.extend_from_slice(&[depth, color, 0, 0, interlace]);
        out
    }

    #[test]
    fn oversized_dimensions_are_malformed() {
        let options = DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX);

        let err = parse_ihdr(&ihdr(u32::MAX, u32::MAX, 8, 6, 0), &options).unwrap_err();
        assert!(matches!(err, PngDecodeErrors::MalformedHeader(_)));

        let header = parse_ihdr(&ihdr(3, 2, 8, 3, 0), &options).unwrap();
        assert_eq!(header.checked_sizes().unwrap(), (3, 8, 6));
    }

    #[test]
    fn parses_fields_in_order() {
        let header = parse_ihdr(&ihdr(300, 2, 8, 6, 0), &DecoderOptions::default()).unwrap();

        assert_eq!(header.width, 300);
        assert_eq!(header.height, 2);
        assert_eq!(header.depth, 8);
        assert_eq!(header.color_code, 6);
        assert_eq!(header.color, ColorMode::RGBA);
        assert_eq!(header.interlace_method, InterlaceMethod::Standard);
        assert_eq!(header.stride(), 1200);
    }

    #[test]
    fn rejects_wrong_length() {
        let mut short = ihdr(1, 1, 8, 6, 0);
        short.pop();
        assert!(matches!(
            parse_ihdr(&short, &DecoderOptions::default()),
            Err(PngDecodeErrors::MalformedHeader(_))
        ));
        let mut long = ihdr(1, 1, 8, 6, 0);
        long.push(0);
        assert!(matches!(
            parse_ihdr(&long, &DecoderOptions::default()),
            Err(PngDecodeErrors::MalformedHeader(_))
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            parse_ihdr(&ihdr(0, 5, 8, 2, 0), &DecoderOptions::default()),
            Err(PngDecodeErrors::MalformedHeader(_))
        ));
    }

    #[test]
    fn respects_limits() {
        let options = DecoderOptions::default().set_max_height(10);
        assert!(matches!(
            parse_ihdr(&ihdr(5, 11, 8, 2, 0), &options),
            Err(PngDecodeErrors::LimitExceeded {
                dimension: "height",
                value: 11,
                limit: 10
            })
        ));
    }

    #[test]
    fn rejects_unsupported_encodings() {
        let options = DecoderOptions::default();

        assert!(matches!(
            parse_ihdr(&ihdr(1, 1, 8, 0, 0), &options),
            Err(PngDecodeErrors::InvalidColorMode(0))
        ));
        assert!(matches!(
            parse_ihdr(&ihdr(1, 1, 16, 2, 0), &options),
            Err(PngDecodeErrors::UnsupportedBitDepth(16))
        ));
        assert!(matches!(
            parse_ihdr(&ihdr(1, 1, 8, 2, 1), &options),
            Err(PngDecodeErrors::UnsupportedInterlace)
        ));
        assert!(matches!(
            parse_ihdr(&ihdr(1, 1, 8, 2, 2), &options),
            Err(PngDecodeErrors::MalformedHeader(_))
        ));
    }

    #[test]
    fn palette_groups_triples() {
        let palette = parse_plte(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(0), Some([1, 2, 3]));
        assert_eq!(palette.get(1), Some([4, 5, 6]));
        assert_eq!(palette.get(2), None);
    }

    #[test]
    fn palette_rejects_bad_lengths() {
        assert!(matches!(
            parse_plte(&[1, 2, 3, 4]),
            Err(PngDecodeErrors::MalformedPalette(_))
        ));
        assert!(matches!(
            parse_plte(&[]),
            Err(PngDecodeErrors::MalformedPalette(_))
        ));
        assert!(matches!(
            parse_plte(&[0; 257 * 3]),
            Err(PngDecodeErrors::MalformedPalette(_))
        ));
        assert_eq!(parse_plte(&[0; 256 * 3]).unwrap().len(), 256);
    }
}
