/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `pngview`
//!
//! These operate on an already decoded [`Image`](pngview_core::image::Image)
//! and never touch the decoder.
//!
//! # Example
//! - Scale an image to half its size
//! ```
//! use pngview_core::image::{Image, Pixel};
//! use pngview_imageprocs::resize::{scale, ResizeMethod};
//!
//! let image = Image::fill(Pixel::rgb(233, 10, 10), 100, 100, false);
//! let half = scale(&image, 0.5, ResizeMethod::Bilinear).unwrap();
//!
//! assert_eq!(half.dimensions(), (50, 50));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod errors;
pub mod histogram;
pub mod resize;
mod utils;
