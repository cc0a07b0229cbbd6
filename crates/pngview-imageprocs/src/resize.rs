/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Resize an image to new dimensions
//!
//! Each channel is resampled on its own, including alpha.
use log::debug;
use pngview_core::image::{Image, Pixel};

use crate::errors::ImageOpsErrors;
use crate::utils::{deinterleave, interleave};

mod bilinear;
mod nearest;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ResizeMethod {
    /// Pick the closest source pixel, keeps hard edges
    Nearest,
    #[default]
    Bilinear
}

impl ResizeMethod {
    pub fn from_name(name: &str) -> Option<ResizeMethod> {
        match name.to_ascii_lowercase().as_str() {
            "nearest" => Some(ResizeMethod::Nearest),
            "bilinear" => Some(ResizeMethod::Bilinear),
            _ => None
        }
    }
}

/// Resize an image to new dimensions
///
/// # Arguments
/// - image: The image to resize
/// - out_width: The expected width
/// - out_height: The expected height.
/// - method: The resizing method to use
///
/// If either output dimension is zero the result has no pixels, an
/// input without pixels produces an output of default pixels.
pub fn resize(image: &Image, out_width: usize, out_height: usize, method: ResizeMethod) -> Image {
    let (in_width, in_height) = image.dimensions();

    if in_width == 0 || in_height == 0 || out_width == 0 || out_height == 0 {
        return Image::fill(Pixel::default(), out_width, out_height, image.has_alpha());
    }

    debug!("Resizing {in_width}x{in_height} to {out_width}x{out_height} using {method:?}");

    let in_planes = deinterleave(image.pixels());
    let mut out_planes: [Vec<u8>; 4] = Default::default();

    for (in_plane, out_plane) in in_planes.iter().zip(out_planes.iter_mut()) {
        *out_plane = vec![0; out_width * out_height];

        match method {
            ResizeMethod::Nearest => nearest::nearest_impl(
                in_plane, out_plane, in_width, in_height, out_width, out_height
            ),
            ResizeMethod::Bilinear => bilinear::bilinear_impl(
                in_plane, out_plane, in_width, in_height, out_width, out_height
            )
        }
    }

    let pixels = interleave(&out_planes);

    // every plane was sized out_width * out_height above
    Image::from_pixels(pixels, out_width, out_height, image.has_alpha())
        .unwrap_or_else(|| Image::fill(Pixel::default(), out_width, out_height, image.has_alpha()))
}

/// Scale both dimensions of an image by `factor`
///
/// New dimensions are rounded to the nearest integer and are never
/// smaller than 1x1.
///
/// # Errors
/// - [`InvalidScale`](ImageOpsErrors::InvalidScale): `factor` is not finite or not greater than zero
/// - [`EmptyImage`](ImageOpsErrors::EmptyImage): the image has no pixels
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub fn scale(image: &Image, factor: f64, method: ResizeMethod) -> Result<Image, ImageOpsErrors> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ImageOpsErrors::InvalidScale(factor));
    }
    if image.pixels().is_empty() {
        return Err(ImageOpsErrors::EmptyImage);
    }
    let new_dimension = |dim: usize| ((dim as f64 * factor).round() as usize).max(1);

    let out_width = new_dimension(image.width());
    let out_height = new_dimension(image.height());

    Ok(resize(image, out_width, out_height, method))
}
