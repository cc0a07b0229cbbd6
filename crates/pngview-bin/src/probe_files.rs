/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::warn;
use pngview_core::options::DecoderOptions;
use pngview_png::{ChunkSummary, PngDecoder};

use crate::errors::CliErrors;
use crate::file_io::read_file;
use crate::serde::Metadata;

/// Probe an input file, extract header and chunk information, and print to standard output.
pub fn probe_input_file(in_file: &Path) -> Result<(), CliErrors> {
    if !in_file.exists() {
        warn!("File {:?} does not exist, skipping", in_file);
        return Ok(());
    }
    let data = read_file(in_file)?;

    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::new_cmd()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let decoder = PngDecoder::new_with_options(&data, options);

    let header = decoder.read_headers()?;
    let chunks: Vec<ChunkSummary> = decoder.chunks()?.iter().map(ChunkSummary::from).collect();

    let metadata = Metadata::new(
        in_file.as_os_str().to_os_string(),
        data.len() as u64,
        &header,
        &chunks
    );
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}
