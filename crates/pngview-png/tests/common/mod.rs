/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(dead_code)]

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pngview_core::image::Image;

pub const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// A chunk with a zeroed crc, the decoder never checks it
pub fn chunk(tag: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + 12);
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&[0; 4]);
    out
}

pub fn ihdr_payload(width: u32, height: u32, depth: u8, color: u8, interlace: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(13);
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.extend_from_slice(&[depth, color, 0, 0, interlace]);
    out
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Signature followed by `chunks`, in order
pub fn png_file(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();
    for c in chunks {
        out.extend_from_slice(c);
    }
    out
}

/// An 8 bit non-interlaced file with the given (already filtered) scanlines
pub fn simple_png(
    width: u32, height: u32, color: u8, palette: Option<&[u8]>, scanlines: &[u8]
) -> Vec<u8> {
    let mut chunks = vec![chunk(b"IHDR", &ihdr_payload(width, height, 8, color, 0))];

    if let Some(palette) = palette {
        chunks.push(chunk(b"PLTE", palette));
    }
    chunks.push(chunk(b"IDAT", &zlib(scanlines)));
    chunks.push(chunk(b"IEND", &[]));

    png_file(&chunks)
}

/// Encode with the `png` crate
pub fn encode_reference(
    width: u32, height: u32, color: png::ColorType, filter: png::FilterType,
    palette: Option<Vec<u8>>, data: &[u8]
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_filter(filter);
        encoder.set_adaptive_filter(png::AdaptiveFilterType::NonAdaptive);

        if let Some(palette) = palette {
            encoder.set_palette(palette);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    out
}

/// Decode with the `png` crate, palettes expanded to RGB
pub fn decode_ref(data: &[u8]) -> Vec<u8> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    buf
}

/// Interleave our pixels the way the reference decoder lays them out
pub fn flatten(image: &Image, components: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(image.pixels().len() * components);

    for px in image.pixels() {
        out.extend_from_slice(&[px.r, px.g, px.b, px.a][..components]);
    }
    out
}
