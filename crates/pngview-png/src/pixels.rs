/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turning de-filtered scanline bytes into pixels
use log::warn;
use pngview_core::image::Pixel;

use crate::enums::ColorMode;
use crate::error::PngDecodeErrors;
use crate::headers::Palette;

/// Map a single pixel's bytes to a [`Pixel`]
///
/// - 4 bytes: red, green, blue, alpha
/// - 3 bytes: red, green, blue, alpha left at the default
/// - 1 byte (indexed): palette lookup, alpha left at the default
///
/// Extra bytes past the pixel width are ignored.
pub fn bytes_to_pixel(
    bytes: &[u8], color: ColorMode, palette: Option<&Palette>, strict: bool
) -> Result<Pixel, PngDecodeErrors> {
    let expected = color.bytes_per_pixel();

    if bytes.len() < expected {
        return Err(PngDecodeErrors::InvalidPixelBytes {
            expected,
            found: bytes.len()
        });
    }
    match expected {
        4 => Ok(Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])),
        3 => Ok(Pixel::rgb(bytes[0], bytes[1], bytes[2])),
        _ => {
            let palette = palette.ok_or(PngDecodeErrors::MissingPalette)?;
            let index = bytes[0];

            match palette.get(index) {
                Some([r, g, b]) => Ok(Pixel::rgb(r, g, b)),
                None if strict => Err(PngDecodeErrors::PaletteIndexOutOfRange {
                    index,
                    entries: palette.len()
                }),
                None => {
                    warn!(
                        "Palette index {index} past palette end ({} entries), using black",
                        palette.len()
                    );
                    Ok(Pixel::rgb(0, 0, 0))
                }
            }
        }
    }
}

/// Convert a de-filtered scanline into pixels, appending them to `out`
pub fn assemble_row(
    row: &[u8], color: ColorMode, palette: Option<&Palette>, strict: bool, out: &mut Vec<Pixel>
) -> Result<(), PngDecodeErrors> {
    // chunks, not chunks_exact, a short tail must surface as an error
    for px in row.chunks(color.bytes_per_pixel()) {
        out.push(bytes_to_pixel(px, color, palette, strict)?);
    }
    Ok(())
}
