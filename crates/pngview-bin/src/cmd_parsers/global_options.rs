/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use pngview_core::options::DecoderOptions;
use pngview_imageprocs::resize::ResizeMethod;

/// Options gathered from the command line
#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder:       DecoderOptions,
    pub scale:         Option<f64>,
    pub resize_method: ResizeMethod,
    pub histogram:     bool,
    pub view:          bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            decoder:       DecoderOptions::default(),
            scale:         None,
            resize_method: ResizeMethod::Bilinear,
            histogram:     false,
            view:          false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.decoder = cmd_options.decoder.set_max_width(*width);
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.decoder = cmd_options.decoder.set_max_height(*height);
    }

    if options.get_flag("strict") {
        info!("Enabling strict mode");
        cmd_options.decoder = cmd_options.decoder.set_strict_mode(true);
    }

    if options.get_flag("no-confirm-adler") {
        info!("Skipping zlib checksum confirmation");
        cmd_options.decoder = cmd_options.decoder.inflate_set_confirm_adler(false);
    }

    cmd_options.scale = options.get_one::<f64>("scale").copied();

    if let Some(method) = options
        .get_one::<String>("resize-method")
        .and_then(|name| ResizeMethod::from_name(name))
    {
        cmd_options.resize_method = method;
    }
    cmd_options.histogram = options.get_flag("histogram");
    cmd_options.view = options.get_flag("view");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
