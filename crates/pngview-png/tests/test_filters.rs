/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decode images filtered by the `png` encoder and compare with the
//! `png` crate's decoder
use nanorand::{Rng, WyRand};
use pngview_png::PngDecoder;

mod common;

use common::*;

const FILTERS: [png::FilterType; 5] = [
    png::FilterType::NoFilter,
    png::FilterType::Sub,
    png::FilterType::Up,
    png::FilterType::Avg,
    png::FilterType::Paeth
];

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rand = WyRand::new_seed(seed);
    let mut data = vec![0_u8; len];
    rand.fill(&mut data);
    data
}

fn test_color(color: png::ColorType, components: usize) {
    for (seed, filter) in FILTERS.iter().enumerate() {
        for (width, height) in [(1, 1), (5, 3), (33, 17)] {
            let pixels = random_bytes(width * height * components, seed as u64);

            let data = encode_reference(
                width as u32,
                height as u32,
                color,
                *filter,
                None,
                &pixels
            );
            let image = PngDecoder::new(&data).decode().unwrap();

            assert_eq!(image.dimensions(), (width, height));
            assert_eq!(
                flatten(&image, components),
                decode_ref(&data),
                "{filter:?} {width}x{height}"
            );
            assert_eq!(flatten(&image, components), pixels);
        }
    }
}

#[test]
fn test_rgb_filters() {
    test_color(png::ColorType::Rgb, 3);
}

#[test]
fn test_rgba_filters() {
    test_color(png::ColorType::Rgba, 4);
}

#[test]
fn test_adaptive_filtering() {
    // smooth gradients make the encoder pick a different filter per row
    let (width, height) = (64_usize, 48_usize);
    let mut pixels = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x * 4) as u8, (y * 5) as u8, ((x + y) * 2) as u8, 255]);
        }
    }
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width as u32, height as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);

        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&pixels).unwrap();
    }
    let image = PngDecoder::new(&out).decode().unwrap();

    assert_eq!(image.as_rgba_bytes(), &pixels[..]);
}

/// Forward filter a row by hand, as an encoder would
fn filter_row(filter: u8, row: &[u8], prev: &[u8], bpp: usize) -> Vec<u8> {
    let mut out = vec![filter];

    for i in 0..row.len() {
        let a = if i >= bpp { row[i - bpp] } else { 0 };
        let b = prev[i];
        let c = if i >= bpp { prev[i - bpp] } else { 0 };

        let predicted = match filter {
            0 => 0,
            1 => a,
            2 => b,
            3 => ((u16::from(a) + u16::from(b)) / 2) as u8,
            _ => pngview_png::filters::paeth(a, b, c)
        };
        out.push(row[i].wrapping_sub(predicted));
    }
    out
}

#[test]
fn test_first_row_treats_prior_as_zero() {
    let rows: [[u8; 6]; 2] = [[200, 10, 255, 3, 250, 128], [1, 2, 3, 4, 5, 6]];

    for filter in 0..5 {
        let mut scanlines = filter_row(filter, &rows[0], &[0; 6], 3);
        scanlines.extend(filter_row(filter, &rows[1], &rows[0], 3));

        let data = simple_png(2, 2, 2, None, &scanlines);
        let image = PngDecoder::new(&data).decode().unwrap();

        assert_eq!(flatten(&image, 3), rows.concat(), "filter {filter}");
    }
}
