/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pngview_core::image::Pixel;

/// Split interleaved pixels into one plane per channel
pub(crate) fn deinterleave(pixels: &[Pixel]) -> [Vec<u8>; 4] {
    let mut planes: [Vec<u8>; 4] = Default::default();

    for plane in &mut planes {
        plane.reserve_exact(pixels.len());
    }
    for px in pixels {
        planes[0].push(px.r);
        planes[1].push(px.g);
        planes[2].push(px.b);
        planes[3].push(px.a);
    }
    planes
}

/// Join four equally sized planes back into pixels
pub(crate) fn interleave(planes: &[Vec<u8>; 4]) -> Vec<Pixel> {
    let [r, g, b, a] = planes;

    r.iter()
        .zip(g)
        .zip(b)
        .zip(a)
        .map(|(((r, g), b), a)| Pixel::new(*r, *g, *b, *a))
        .collect()
}
