/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single decoded image
//!
//! An image is a row-major grid of [`Pixel`]s, `height` rows of
//! `width` pixels each.
//!
//! Every pixel carries four channels. Sources without an alpha
//! channel leave `a` at [`ALPHA_DEFAULT`], and [`Image::has_alpha`]
//! reports whether the channel carries data, consumers must check it
//! before treating `a` as transparency.
use bytemuck::{Pod, Zeroable};

/// Alpha value stored for pixels whose source had no alpha channel
pub const ALPHA_DEFAULT: u8 = 0;

/// A single RGBA pixel
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel { r, g, b, a }
    }
    /// Create a pixel for a source without alpha, alpha is set to
    /// [`ALPHA_DEFAULT`]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
        Pixel::new(r, g, b, ALPHA_DEFAULT)
    }
}

/// Represents a single image
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Image {
    width:     usize,
    height:    usize,
    has_alpha: bool,
    pixels:    Vec<Pixel>
}

impl Image {
    /// Create an image from row-major pixels
    ///
    /// Returns `None` if `pixels.len()` is not `width * height`
    pub fn from_pixels(
        pixels: Vec<Pixel>, width: usize, height: usize, has_alpha: bool
    ) -> Option<Image> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Image {
            width,
            height,
            has_alpha,
            pixels
        })
    }
    /// Create an image with every pixel set to `pixel`
    pub fn fill(pixel: Pixel, width: usize, height: usize, has_alpha: bool) -> Image {
        Image {
            width,
            height,
            has_alpha,
            pixels: vec![pixel; width * height]
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Return true if the alpha channel of the pixels carries data
    pub const fn has_alpha(&self) -> bool {
        self.has_alpha
    }
    /// All pixels, row-major
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
    /// The pixels viewed as interleaved RGBA bytes
    pub fn as_rgba_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        // chunks_exact panics on zero, an empty image yields nothing either way
        self.pixels.chunks_exact(self.width.max(1))
    }
    /// Return row `y` or `None` if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get(start..start + self.width)
    }
    /// Return the pixel at `(x, y)` or `None` if out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width {
            return None;
        }
        self.row(y).map(|row| row[x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_width() {
        let pixels = (0..6).map(|i| Pixel::rgb(i, i, i)).collect();
        let image = Image::from_pixels(pixels, 3, 2, false).unwrap();

        assert_eq!(image.rows().len(), 2);
        assert_eq!(image.row(1).unwrap()[0], Pixel::rgb(3, 3, 3));
        assert_eq!(image.pixel(2, 1), Some(Pixel::rgb(5, 5, 5)));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.row(2), None);
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        assert!(Image::from_pixels(vec![Pixel::default(); 5], 2, 3, true).is_none());
    }

    #[test]
    fn rgba_bytes_are_interleaved() {
        let image = Image::fill(Pixel::new(1, 2, 3, 4), 2, 1, true);
        assert_eq!(image.as_rgba_bytes(), &[1, 2, 3, 4, 1, 2, 3, 4]);
    }
}
