/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A png decoder
//!
//! This features a small, strict png reader for 8 bit, non-interlaced
//! truecolor (RGB, RGBA) and indexed images.
//!
//! Decoding runs as a pipeline
//! - signature check
//! - chunk splitting, with the header interpreted as soon as it is read
//! - palette parsing and IDAT concatenation, stopping at IEND
//! - inflate, through a replaceable [`InflateHandler`]
//! - scanline reconstruction into a grid of [`Pixel`](pngview_core::image::Pixel)s
//!
//! # Usage
//!
//!```no_run
//! use pngview_png::PngDecoder;
//!
//! let data = std::fs::read("image.png").unwrap();
//! let decoder = PngDecoder::new(&data);
//!
//! let header = decoder.read_headers().unwrap();
//! println!("{}x{}", header.width, header.height);
//!
//! let image = decoder.decode().unwrap();
//!```
//!
//! # Options
//!
//! Dimension limits, strictness on out of range palette indices and zlib
//! checksum confirmation are configured via
//! [`DecoderOptions`](pngview_core::options::DecoderOptions)
//!
//!```no_run
//! use pngview_core::options::DecoderOptions;
//! use pngview_png::PngDecoder;
//!
//! let options = DecoderOptions::default()
//!     .set_max_width(1024)
//!     .set_strict_mode(true);
//!
//! let image = PngDecoder::new_with_options(&[], options).decode();
//!```
//!
//! # Not supported
//! - Grayscale color types
//! - Bit depths other than 8
//! - Adam7 interlacing
//! - CRC verification, chunk crc's are read but not checked
pub use chunks::{parse_chunks, ChunkReader, PngChunk};
pub use decoder::{
    reconstruct_image, validate_signature, ChunkSummary, DecodedPng, PngDecoder
};
pub use enums::{ColorMode, FilterMethod, InterlaceMethod, PngChunkType};
pub use headers::{parse_ihdr, parse_plte, Palette, PngHeader};
pub use options::{default_inflate_handler, InflateHandler};
pub use pngview_core;

mod chunks;
pub mod constants;
mod decoder;
mod enums;
pub mod error;
pub mod filters;
mod headers;
mod options;
pub mod pixels;
