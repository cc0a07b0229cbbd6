/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Nearest neighbour resampling of a single channel
///
/// Output pixel `(x, y)` takes input pixel
/// `(x * in_width / out_width, y * in_height / out_height)`
pub fn nearest_impl(
    in_channel: &[u8], out_channel: &mut [u8], in_width: usize, in_height: usize,
    out_width: usize, out_height: usize
) {
    for (y, out_row) in out_channel.chunks_exact_mut(out_width).enumerate() {
        let in_y = y * in_height / out_height;
        let in_row = &in_channel[in_y * in_width..(in_y + 1) * in_width];

        for (x, out_px) in out_row.iter_mut().enumerate() {
            *out_px = in_row[x * in_width / out_width];
        }
    }
}
