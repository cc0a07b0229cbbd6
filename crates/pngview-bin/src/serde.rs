/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use pngview_png::{ChunkSummary, ColorMode, PngHeader};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// Header and chunk layout of a single file, as printed by `--probe`
pub struct Metadata<'a> {
    file:   OsString,
    size:   u64,
    header: &'a PngHeader,
    chunks: &'a [ChunkSummary]
}

impl<'a> Metadata<'a> {
    pub fn new(
        file: OsString, size: u64, header: &'a PngHeader, chunks: &'a [ChunkSummary]
    ) -> Metadata<'a> {
        Metadata {
            file,
            size,
            header,
            chunks
        }
    }
}

fn color_name(color: ColorMode) -> &'static str {
    match color {
        ColorMode::RGBA => "RGBA",
        ColorMode::PALETTE => "Palette",
        _ => "RGB"
    }
}

struct Chunks<'a>(&'a [ChunkSummary]);

struct Chunk<'a>(&'a ChunkSummary);

impl Serialize for Chunk<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Chunk", 4)?;

        state.serialize_field("name", &self.0.name)?;
        state.serialize_field("length", &self.0.length)?;
        state.serialize_field("offset", &self.0.offset)?;
        state.serialize_field("crc", &format!("{:08x}", self.0.crc))?;

        state.end()
    }
}

impl Serialize for Chunks<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;

        for chunk in self.0 {
            seq.serialize_element(&Chunk(chunk))?;
        }
        seq.end()
    }
}

impl Serialize for Metadata<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 9)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.header.width)?;
        state.serialize_field("height", &self.header.height)?;
        state.serialize_field("depth", &self.header.depth)?;
        state.serialize_field("color_type", &self.header.color_code)?;
        state.serialize_field("colorspace", color_name(self.header.color))?;
        state.serialize_field("bytes_per_pixel", &self.header.bytes_per_pixel())?;
        state.serialize_field("chunks", &Chunks(self.chunks))?;

        state.end()
    }
}
