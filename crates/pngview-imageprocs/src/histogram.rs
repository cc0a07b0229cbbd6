/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate channel histogram statistics
//!
//! An image histogram is a graph that shows the number of pixels in an image at each intensity value
//!
//! The alpha channel is only counted for images where it carries data,
//! see [`Image::has_alpha`]
use pngview_core::image::{Image, Pixel};

use crate::errors::ImageOpsErrors;
use crate::utils::deinterleave;

/// Colours used when plotting each channel
const PLOT_COLORS: [[u8; 3]; 4] = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [128, 128, 128]];

/// A channel histogram instance
///
/// The histograms are ordered `r, g, b` with `a` appended when the
/// image has alpha.
///
/// # Example
/// ```rust
/// use pngview_core::image::{Image, Pixel};
/// use pngview_imageprocs::histogram::ChannelHistogram;
///
/// let image = Image::fill(Pixel::rgb(100, 100, 100), 100, 100, false);
/// let histogram = ChannelHistogram::new(&image);
/// // r had 100 items
/// assert_eq!(histogram.channel(0).unwrap()[100], 100_u32 * 100);
/// assert_eq!(histogram.channels(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ChannelHistogram {
    histogram: Vec<[u32; 256]>,
    pixels:    usize
}

impl ChannelHistogram {
    /// Create a new channel histogram
    #[must_use]
    pub fn new(image: &Image) -> ChannelHistogram {
        let channels = if image.has_alpha() { 4 } else { 3 };

        let planes = deinterleave(image.pixels());

        let histogram = planes
            .iter()
            .take(channels)
            .map(|plane| histogram(plane))
            .collect();

        ChannelHistogram {
            histogram,
            pixels: image.pixels().len()
        }
    }
    /// Number of channels counted, 3 or 4
    pub fn channels(&self) -> usize {
        self.histogram.len()
    }
    /// Number of pixels counted per channel
    pub const fn pixels(&self) -> usize {
        self.pixels
    }
    /// Counts per intensity value of channel `index`
    pub fn channel(&self, index: usize) -> Option<&[u32; 256]> {
        self.histogram.get(index)
    }
    /// Mean intensity of channel `index`
    ///
    /// Returns `None` for a missing channel or an image without pixels
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self, index: usize) -> Option<f64> {
        let channel = self.channel(index)?;

        if self.pixels == 0 {
            return None;
        }
        let sum: u64 = channel
            .iter()
            .enumerate()
            .map(|(value, count)| value as u64 * u64::from(*count))
            .sum();

        Some(sum as f64 / self.pixels as f64)
    }

    /// Render the histogram as a 256 wide bar plot
    ///
    /// Each intensity value is a column, bars are scaled so the tallest
    /// count across all channels fills `height`. Channels are drawn in
    /// their own colour and add up where they overlap.
    ///
    /// # Errors
    /// - [`EmptyImage`](ImageOpsErrors::EmptyImage): the histogram counted no pixels
    /// - [`Generic`](ImageOpsErrors::Generic): `height` is zero
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    pub fn plot(&self, height: usize) -> Result<Image, ImageOpsErrors> {
        if self.pixels == 0 {
            return Err(ImageOpsErrors::EmptyImage);
        }
        if height == 0 {
            return Err(ImageOpsErrors::Generic(
                "Histogram plot height must be greater than zero".to_string()
            ));
        }
        let max = self
            .histogram
            .iter()
            .flat_map(|channel| channel.iter())
            .copied()
            .max()
            .unwrap_or(0)
            .max(1);

        let mut plot = vec![Pixel::rgb(0, 0, 0); 256 * height];

        for (channel, color) in self.histogram.iter().zip(PLOT_COLORS) {
            for (x, count) in channel.iter().enumerate() {
                let bar = ((f64::from(*count) / f64::from(max)) * height as f64).round() as usize;

                // bars grow from the bottom row up
                for y in height - bar.min(height)..height {
                    let px = &mut plot[y * 256 + x];

                    px.r = px.r.saturating_add(color[0]);
                    px.g = px.g.saturating_add(color[1]);
                    px.b = px.b.saturating_add(color[2]);
                }
            }
        }
        Image::from_pixels(plot, 256, height, false)
            .ok_or_else(|| ImageOpsErrors::Generic("Could not build histogram plot".to_string()))
    }
}

#[must_use]
pub fn histogram(data: &[u8]) -> [u32; 256] {
    // four interleaved tables so consecutive bytes rarely hit the same counter,
    // see https://fastcompression.blogspot.com/2014/09/counting-bytes-fast-little-trick-from.html
    let mut start1 = [0; 256];
    let mut counts = [0_u32; 256 * 3];
    let (start2, counts) = counts.split_at_mut(256);
    let (start3, start4) = counts.split_at_mut(256);
    let chunks = data.chunks_exact(8);
    let remainder = chunks.remainder();

    for i in chunks {
        let tmp1 = u64::from_le_bytes([i[0], i[1], i[2], i[3], i[4], i[5], i[6], i[7]]);

        start1[((tmp1 >> 56) & 255) as usize] += 1;
        start2[((tmp1 >> 48) & 255) as usize] += 1;
        start3[((tmp1 >> 40) & 255) as usize] += 1;
        start4[((tmp1 >> 32) & 255) as usize] += 1;
        start1[((tmp1 >> 24) & 255) as usize] += 1;
        start2[((tmp1 >> 16) & 255) as usize] += 1;
        start3[((tmp1 >> 8) & 255) as usize] += 1;

        start4[(tmp1 & 255) as usize] += 1;
    }

    for i in remainder {
        start1[usize::from(*i)] += 1;
    }
    for (((b, c), d), e) in start1
        .iter_mut()
        .zip(start2.iter())
        .zip(start3.iter())
        .zip(start4.iter())
    {
        *b += c + d + e;
    }

    start1
}
