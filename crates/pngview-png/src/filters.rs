/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline de-filtering
//!
//! Each function reverses one filter type for a single scanline.
//!
//! - `raw` is the filtered scanline, without the filter byte
//! - `current` is where de-filtered bytes are written, same length as `raw`
//! - `prev_row` is the already de-filtered scanline above
//! - `components` is the number of bytes per pixel, the distance to the
//!   left neighbour
//!
//! All arithmetic wraps modulo 256, bytes without a left or upper
//! neighbour use zero in its place.

pub fn handle_sub(raw: &[u8], current: &mut [u8], components: usize) {
    if current.len() < components || raw.len() < components {
        current.copy_from_slice(raw);
        return;
    }
    // handle leftmost pixel explicitly
    current[..components].copy_from_slice(&raw[..components]);

    // raw length is one row,so always keep it in check
    let end = current.len().min(raw.len());

    for i in components..end {
        let a = current[i - components];
        current[i] = raw[i].wrapping_add(a);
    }
}

pub fn handle_up(prev_row: &[u8], raw: &[u8], current: &mut [u8]) {
    for ((filt, recon), up) in raw.iter().zip(current).zip(prev_row) {
        *recon = (*filt).wrapping_add(*up)
    }
}

pub fn handle_avg(prev_row: &[u8], raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len()).min(prev_row.len());
    let first = components.min(end);

    // handle leftmost pixel explicitly
    for i in 0..first {
        current[i] = raw[i].wrapping_add(prev_row[i] >> 1);
    }

    for i in first..end {
        // this needs to be performed with at least 9 bits of precision, so bump
        // it up to 16.
        let recon_a = u16::from(current[i - components]);
        let recon_b = u16::from(prev_row[i]);

        let recon_x = ((recon_a + recon_b) >> 1) as u8;

        current[i] = raw[i].wrapping_add(recon_x);
    }
}

pub fn handle_paeth(prev_row: &[u8], raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len()).min(prev_row.len());
    let first = components.min(end);

    // handle leftmost pixel explicitly, left and upper left are zero
    for i in 0..first {
        current[i] = raw[i].wrapping_add(paeth(0, prev_row[i], 0));
    }

    for i in first..end {
        let paeth_res = paeth(
            current[i - components],
            prev_row[i],
            prev_row[i - components]
        );
        current[i] = raw[i].wrapping_add(paeth_res)
    }
}

/// Handle images with the first scanline as paeth scanline
///
/// Special in that the above row is treated as zero, where paeth
/// always picks the left neighbour, so this is a sub filter
pub fn handle_paeth_first(raw: &[u8], current: &mut [u8], components: usize) {
    handle_sub(raw, current, components)
}

/// Handle images with the first scanline as an average scanline
///
/// The above row is treated as zero
pub fn handle_avg_first(raw: &[u8], current: &mut [u8], components: usize) {
    let end = current.len().min(raw.len());
    let first = components.min(end);

    // handle leftmost pixel explicitly
    current[..first].copy_from_slice(&raw[..first]);

    for i in first..end {
        let avg = current[i - components] >> 1;
        current[i] = raw[i].wrapping_add(avg)
    }
}

/// The paeth predictor
///
/// Computes `p = a + b - c` and returns whichever of `a`, `b`, `c`
/// is closest to `p`, ties go to `a`, then `b`.
///
/// - `a`: left
/// - `b`: above
/// - `c`: upper left
#[inline(always)]
pub fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let (a16, b16, c16) = (i16::from(a), i16::from(b), i16::from(c));

    let p = a16 + b16 - c16;

    let pa = (p - a16).abs();
    let pb = (p - b16).abs();
    let pc = (p - c16).abs();

    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paeth_self_consistency() {
        for a in 0..=255_u8 {
            assert_eq!(paeth(a, a, a), a);

            for b in 0..=255_u8 {
                assert_eq!(paeth(a, b, a), b, "paeth({a},{b},{a})");
            }
        }
    }

    #[test]
    fn paeth_tie_breaking() {
        // p = 15, |p-a| == |p-b| == 5, c is exact
        assert_eq!(paeth(20, 10, 15), 15);
        assert_eq!(paeth(133, 131, 129), 133);
        assert_eq!(paeth(10, 20, 30), 10);
        assert_eq!(paeth(0, 0, 0), 0);
        // p = 10, pa = 0 ties nothing, a wins
        assert_eq!(paeth(10, 0, 0), 10);
        // p = 0, pa = 10, pb = 0, b wins
        assert_eq!(paeth(10, 0, 10), 0);
        // p = 5, pa = 5, pb = 5, pc = 0: c
        assert_eq!(paeth(10, 0, 5), 5);
        // p = 1, pa = pb = 1, pc = 0: c
        assert_eq!(paeth(0, 2, 1), 1);
        // p = 3, pa = 0 == pb: a wins the tie with b
        assert_eq!(paeth(3, 3, 3), 3);
        // p = 2, pa = 4, pb = pc = 2: b wins the tie with c
        assert_eq!(paeth(6, 0, 4), 0);
    }

    #[test]
    fn sub_round_trip() {
        let original: Vec<u8> = (0..60_u32).map(|i| (i * 37 % 251) as u8).collect();

        for components in [1, 3, 4] {
            let filtered: Vec<u8> = original
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let left = if i >= components { original[i - components] } else { 0 };
                    v.wrapping_sub(left)
                })
                .collect();

            let mut out = vec![0; original.len()];
            handle_sub(&filtered, &mut out, components);
            assert_eq!(out, original, "components {components}");
        }
    }

    #[test]
    fn up_adds_previous_row() {
        let prev = [250, 10, 0];
        let raw = [10, 10, 255];
        let mut out = [0; 3];
        handle_up(&prev, &raw, &mut out);
        assert_eq!(out, [4, 20, 255]);
    }

    #[test]
    fn avg_uses_floor_without_overflow() {
        let prev = [255, 255, 255, 255];
        let raw = [0, 0, 0, 1];
        let mut out = [0; 4];
        handle_avg(&prev, &raw, &mut out, 2);
        // leftmost: 0 + 255 / 2
        assert_eq!(out[0], 127);
        assert_eq!(out[1], 127);
        // (127 + 255) / 2 = 191, computed without 8 bit overflow
        assert_eq!(out[2], 191);
        assert_eq!(out[3], 192);
    }

    #[test]
    fn avg_first_matches_avg_with_zero_row() {
        let raw: Vec<u8> = (0..24).map(|x| x * 11).collect();
        let zeros = vec![0; raw.len()];

        let mut a = vec![0; raw.len()];
        let mut b = vec![0; raw.len()];

        handle_avg_first(&raw, &mut a, 3);
        handle_avg(&zeros, &raw, &mut b, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn paeth_first_matches_paeth_with_zero_row() {
        let raw: Vec<u8> = (0..24).map(|x| 255 - x * 7).collect();
        let zeros = vec![0; raw.len()];

        let mut a = vec![0; raw.len()];
        let mut b = vec![0; raw.len()];

        handle_paeth_first(&raw, &mut a, 4);
        handle_paeth(&zeros, &raw, &mut b, 4);
        assert_eq!(a, b);
    }
}
