/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the pngview family of crates
//!
//! This contains
//! - A byte reader for walking big endian container formats
//! - Decoder options respected by the png decoder
//! - The decoded pixel grid, [`Image`](image::Image), handed to
//!   scaling, histogram and display routines
pub mod bytestream;
pub mod image;
pub mod options;
