/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, trace};
use pngview_core::image::Image;
use pngview_core::options::DecoderOptions;

use crate::chunks::{ChunkReader, PngChunk};
use crate::constants::PNG_SIGNATURE;
use crate::enums::{FilterMethod, PngChunkType};
use crate::error::PngDecodeErrors;
use crate::filters::{
    handle_avg, handle_avg_first, handle_paeth, handle_paeth_first, handle_sub, handle_up
};
use crate::headers::{parse_ihdr, parse_plte, Palette, PngHeader};
use crate::options::{default_inflate_handler, InflateHandler};
use crate::pixels::assemble_row;

/// Check that `data` starts with the png signature
pub fn validate_signature(data: &[u8]) -> Result<(), PngDecodeErrors> {
    match data.get(..PNG_SIGNATURE.len()) {
        Some(signature) if signature == PNG_SIGNATURE => Ok(()),
        _ => {
            let found = data.iter().take(PNG_SIGNATURE.len()).copied().collect();
            Err(PngDecodeErrors::SignatureMismatch(found))
        }
    }
}

/// Position, type and size of a chunk, without its payload
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ChunkSummary {
    pub name:   String,
    pub length: u32,
    pub offset: usize,
    pub crc:    u32
}

impl From<&PngChunk<'_>> for ChunkSummary {
    fn from(chunk: &PngChunk<'_>) -> Self {
        ChunkSummary {
            name:   chunk.name().to_string(),
            length: chunk.length,
            offset: chunk.offset,
            crc:    chunk.crc
        }
    }
}

/// A decoded image together with the chunk layout it came from
#[derive(Debug, Clone)]
pub struct DecodedPng {
    pub header: PngHeader,
    pub chunks: Vec<ChunkSummary>,
    pub image:  Image
}

/// The structural chunks of a stream, interpreted
struct PngParts {
    header:  PngHeader,
    palette: Option<Palette>,
    idat:    Vec<u8>,
    chunks:  Vec<ChunkSummary>
}

/// Walk the chunks after the signature, interpreting the header as soon
/// as it is read and concatenating IDAT payloads until IEND
fn collect_parts(stream: &[u8], options: &DecoderOptions) -> Result<PngParts, PngDecodeErrors> {
    let mut header: Option<PngHeader> = None;
    let mut palette: Option<Palette> = None;
    let mut idat = Vec::new();
    let mut chunks = Vec::new();

    for chunk in ChunkReader::new(stream) {
        let chunk = chunk?;

        trace!(
            "Chunk {} at offset {}, length {}",
            chunk.name(),
            chunk.offset,
            chunk.length
        );
        chunks.push(ChunkSummary::from(&chunk));

        match (chunk.chunk_type, header.is_some()) {
            (PngChunkType::IHDR, false) => header = Some(parse_ihdr(chunk.data, options)?),
            (PngChunkType::IHDR, true) => {
                return Err(PngDecodeErrors::MalformedHeader(
                    "Multiple IHDR chunks, corrupt PNG".to_string()
                ))
            }
            (_, false) => {
                return Err(PngDecodeErrors::MissingHeader {
                    found: Some(chunk.chunk)
                })
            }
            (PngChunkType::PLTE, true) => {
                if palette.is_some() {
                    return Err(PngDecodeErrors::MalformedPalette(
                        "Multiple PLTE chunks, corrupt PNG".to_string()
                    ));
                }
                palette = Some(parse_plte(chunk.data)?);
            }
            // get the payloads of the IDAT chunks and concatenate them,
            // they are passed to the inflate decoder as a whole
            (PngChunkType::IDAT, true) => idat.extend_from_slice(chunk.data),
            (PngChunkType::IEND, true) => break,
            (PngChunkType::Unknown, true) => {
                trace!("Skipping chunk {}", chunk.name());
            }
        }
    }
    let header = header.ok_or(PngDecodeErrors::MissingHeader { found: None })?;

    Ok(PngParts {
        header,
        palette,
        idat,
        chunks
    })
}

/// Reverse scanline filtering and map the result to pixels
///
/// `data` is the inflated stream, `height` scanlines of one filter byte
/// followed by `header.stride()` filtered bytes.
///
/// Filtering operates on the raw bytes, for indexed images that is the
/// palette index, the lookup happens after a row is fully de-filtered.
pub fn reconstruct_image(
    data: &[u8], header: &PngHeader, palette: Option<&Palette>, strict: bool
) -> Result<Image, PngDecodeErrors> {
    let (width_stride, _, pixel_count) = header.checked_sizes()?;
    let components = header.bytes_per_pixel();

    if header.color.has_palette && palette.is_none() {
        return Err(PngDecodeErrors::MissingPalette);
    }

    // never reserve more than the stream can fill
    let mut pixels = Vec::with_capacity(pixel_count.min(data.len()));

    // sized once the first scanline is known to be present,
    // the row above the first one is all zeros
    let mut prev_row = Vec::new();
    let mut current = Vec::new();

    let mut position = 0;

    for row in 0..header.height {
        let overrun = || PngDecodeErrors::ReconstructionOverrun {
            row,
            expected: width_stride + 1,
            found: data.len().saturating_sub(position)
        };
        // take filter
        let filter_byte = *data.get(position).ok_or_else(overrun)?;

        let mut filter = FilterMethod::from_int(filter_byte).ok_or(
            PngDecodeErrors::UnsupportedFilterType {
                row,
                filter: filter_byte
            }
        )?;
        // raw image bytes
        let raw = data
            .get(position + 1..position + 1 + width_stride)
            .ok_or_else(overrun)?;

        if row == 0 {
            prev_row = vec![0_u8; width_stride];
            current = vec![0_u8; width_stride];
            // these special filters do not need the previous scanline and treat it
            // as zero
            filter = filter.first_row();
        }

        match filter {
            FilterMethod::None => current.copy_from_slice(raw),

            FilterMethod::Sub => handle_sub(raw, &mut current, components),

            FilterMethod::Up => handle_up(&prev_row, raw, &mut current),

            FilterMethod::Average => handle_avg(&prev_row, raw, &mut current, components),

            FilterMethod::Paeth => handle_paeth(&prev_row, raw, &mut current, components),

            FilterMethod::PaethFirst => handle_paeth_first(raw, &mut current, components),

            FilterMethod::AvgFirst => handle_avg_first(raw, &mut current, components)
        }

        assemble_row(&current, header.color, palette, strict, &mut pixels)?;

        // current becomes the row above for the next scanline
        core::mem::swap(&mut prev_row, &mut current);

        position += width_stride + 1;
    }

    if position < data.len() {
        debug!(
            "{} bytes after the last scanline, ignoring them",
            data.len() - position
        );
    }

    let found = pixels.len();

    Image::from_pixels(pixels, header.width, header.height, header.color.has_alpha).ok_or(
        PngDecodeErrors::InvalidPixelBytes {
            expected: pixel_count,
            found
        }
    )
}

/// A png decoder
///
/// The decoder borrows the whole file and holds no decoding state,
/// every method runs the stages it needs from the start.
///
/// # Example
/// ```no_run
/// use pngview_png::PngDecoder;
///
/// let data = std::fs::read("image.png").unwrap();
/// let image = PngDecoder::new(&data).decode().unwrap();
///
/// for row in image.rows() {
///     for pixel in row {
///         // do something with pixel.r, pixel.g, pixel.b
///     }
/// }
/// ```
#[derive(Copy, Clone)]
pub struct PngDecoder<'a> {
    data:    &'a [u8],
    options: DecoderOptions,
    inflate: InflateHandler
}

impl<'a> PngDecoder<'a> {
    pub fn new(data: &'a [u8]) -> PngDecoder<'a> {
        let default_opt = DecoderOptions::default();

        PngDecoder::new_with_options(data, default_opt)
    }

    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> PngDecoder<'a> {
        PngDecoder {
            data,
            options,
            inflate: default_inflate_handler
        }
    }
    /// Replace the routine used to decompress image data
    pub fn set_inflate_handler(mut self, handler: InflateHandler) -> PngDecoder<'a> {
        self.inflate = handler;
        self
    }

    fn stream(&self) -> Result<&'a [u8], PngDecodeErrors> {
        validate_signature(self.data)?;
        Ok(&self.data[PNG_SIGNATURE.len()..])
    }

    /// Return every chunk up to and including IEND, without interpreting them
    pub fn chunks(&self) -> Result<Vec<PngChunk<'a>>, PngDecodeErrors> {
        ChunkReader::new(self.stream()?).collect()
    }

    /// Read and interpret the IHDR chunk only
    pub fn read_headers(&self) -> Result<PngHeader, PngDecodeErrors> {
        let first = ChunkReader::new(self.stream()?)
            .next()
            .ok_or(PngDecodeErrors::MissingHeader { found: None })??;

        if first.chunk_type != PngChunkType::IHDR {
            return Err(PngDecodeErrors::MissingHeader {
                found: Some(first.chunk)
            });
        }
        parse_ihdr(first.data, &self.options)
    }

    /// Decode the image
    pub fn decode(&self) -> Result<Image, PngDecodeErrors> {
        self.decode_info().map(|decoded| decoded.image)
    }

    /// Decode the image, also returning the header and chunk layout
    pub fn decode_info(&self) -> Result<DecodedPng, PngDecodeErrors> {
        let parts = collect_parts(self.stream()?, &self.options)?;

        let header = parts.header;

        if header.color.has_palette && parts.palette.is_none() {
            return Err(PngDecodeErrors::MissingPalette);
        }
        if !header.color.has_palette && parts.palette.is_some() {
            debug!("PLTE chunk in a truecolor image, ignoring it");
        }
        debug!("Concatenated {} bytes of IDAT data", parts.idat.len());

        let (_, size_hint, _) = header.checked_sizes()?;

        let inflated = (self.inflate)(&parts.idat, &self.options, size_hint)?;

        // remove idat chunks from memory
        // we are already done with them.
        drop(parts.idat);

        let palette = if header.color.has_palette {
            parts.palette.as_ref()
        } else {
            None
        };
        let image = reconstruct_image(&inflated, &header, palette, self.options.get_strict_mode())?;

        debug!("Reconstructed image with {} rows", image.height());

        Ok(DecodedPng {
            header,
            chunks: parts.chunks,
            image
        })
    }
}
