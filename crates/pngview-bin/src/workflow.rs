/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use pngview_core::image::Image;
use pngview_imageprocs::histogram::ChannelHistogram;
use pngview_imageprocs::resize::scale;
use pngview_png::PngDecoder;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{read_file, write_pam_file};
use crate::probe_files::probe_input_file;
use crate::show_gui::open_in_default_app;

const CHANNEL_NAMES: [&str; 4] = ["R", "G", "B", "A"];

/// Height of the plot opened by `--histogram --view`
const HISTOGRAM_PLOT_HEIGHT: usize = 200;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), CliErrors> {
    info!("Creating workflows from input");

    let inputs: Vec<&String> = args
        .get_many::<String>("in")
        .ok_or_else(|| CliErrors::Generic("No input files".to_string()))?
        .collect();

    if args.get_flag("probe") {
        for in_file in inputs {
            probe_input_file(Path::new(in_file))?;
        }
        return Ok(());
    }

    let outputs: Vec<&String> = args
        .get_many::<String>("out")
        .map(|values| values.collect())
        .unwrap_or_default();

    if !outputs.is_empty() && outputs.len() != inputs.len() {
        return Err(CliErrors::Generic(format!(
            "Got {} input files but {} output files",
            inputs.len(),
            outputs.len()
        )));
    }

    for (pos, in_file) in inputs.iter().enumerate() {
        let image = decode_file(Path::new(in_file), cmd_opts)?;

        let image = match cmd_opts.scale {
            Some(factor) => {
                let scaled = scale(&image, factor, cmd_opts.resize_method)?;
                info!(
                    "Scaled {:?} to {}x{}",
                    in_file,
                    scaled.width(),
                    scaled.height()
                );
                scaled
            }
            None => image
        };

        if cmd_opts.histogram {
            let histogram = ChannelHistogram::new(&image);

            for (channel, name) in CHANNEL_NAMES.iter().enumerate().take(histogram.channels()) {
                if let Some(mean) = histogram.mean(channel) {
                    println!("{in_file} {name}: mean {mean:.3}");
                }
            }
            if cmd_opts.view {
                open_in_default_app(&histogram.plot(HISTOGRAM_PLOT_HEIGHT)?)?;
            }
        }

        if let Some(out_file) = outputs.get(pos) {
            write_pam_file(&image, out_file)?;
            info!("Wrote {:?} to {:?}", in_file, out_file);
        }

        if cmd_opts.view {
            open_in_default_app(&image)?;
        }
    }
    Ok(())
}

/// Read and decode a single file, logging its chunk layout
fn decode_file(in_file: &Path, cmd_opts: &CmdOptions) -> Result<Image, CliErrors> {
    let data = read_file(in_file)?;

    let decoded = PngDecoder::new_with_options(&data, cmd_opts.decoder).decode_info()?;

    for chunk in &decoded.chunks {
        debug!(
            "Chunk {} at offset {}, {} bytes",
            chunk.name, chunk.offset, chunk.length
        );
    }
    info!(
        "Decoded {:?}, {}x{}",
        in_file,
        decoded.image.width(),
        decoded.image.height()
    );

    Ok(decoded.image)
}
