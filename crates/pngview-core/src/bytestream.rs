/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! Useful for container formats which store fixed width
//! big endian fields, it's put here so that the chunk parser
//! and the header parser share one cursor implementation
pub use reader::{ZByteIoError, ZByteReader};

mod reader;
