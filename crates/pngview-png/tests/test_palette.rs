/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use pngview_core::image::{Pixel, ALPHA_DEFAULT};
use pngview_png::PngDecoder;

mod common;

use common::*;

#[test]
fn test_indexed_matches_reference() {
    let mut rand = WyRand::new_seed(0xB0BA);

    for entries in [1_usize, 16, 200, 256] {
        let mut palette = vec![0_u8; entries * 3];
        rand.fill(&mut palette);

        let (width, height) = (19, 11);
        let indices: Vec<u8> = (0..width * height)
            .map(|_| rand.generate_range(0..entries as u32) as u8)
            .collect();

        for filter in [png::FilterType::NoFilter, png::FilterType::Sub, png::FilterType::Paeth] {
            let data = encode_reference(
                width as u32,
                height as u32,
                png::ColorType::Indexed,
                filter,
                Some(palette.clone()),
                &indices
            );
            let image = PngDecoder::new(&data).decode().unwrap();

            assert!(!image.has_alpha());
            assert_eq!(flatten(&image, 3), decode_ref(&data), "{entries} entries");
        }
    }
}

#[test]
fn test_filtering_happens_on_indices() {
    // Sub filtered indices [2, 1] reconstruct to [2, 3]
    let palette = [0, 0, 0, 10, 10, 10, 20, 20, 20, 30, 30, 30];
    let data = simple_png(2, 1, 3, Some(&palette), &[1, 2, 1]);

    let image = PngDecoder::new(&data).decode().unwrap();

    assert_eq!(
        image.pixels(),
        &[
            Pixel::new(20, 20, 20, ALPHA_DEFAULT),
            Pixel::new(30, 30, 30, ALPHA_DEFAULT)
        ]
    );
}

#[test]
fn test_palette_may_follow_idat() {
    let data = png_file(&[
        chunk(b"IHDR", &ihdr_payload(1, 1, 8, 3, 0)),
        chunk(b"IDAT", &zlib(&[0, 0])),
        chunk(b"PLTE", &[7, 8, 9]),
        chunk(b"IEND", &[])
    ]);
    let image = PngDecoder::new(&data).decode().unwrap();

    assert_eq!(image.pixels(), &[Pixel::rgb(7, 8, 9)]);
}
