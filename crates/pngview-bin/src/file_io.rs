/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use log::{info, trace};
use pngview_core::image::Image;

use crate::errors::CliErrors;

/// Read a whole file into memory
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, CliErrors> {
    let mut fd = File::open(path.as_ref())?;
    let mut buf = Vec::with_capacity(1 << 20);

    fd.read_to_end(&mut buf)?;
    info!("Read {} bytes from {:?}", buf.len(), path.as_ref());

    Ok(buf)
}

/// Write an image as a PAM (P7) file
///
/// Images with alpha are written as `RGB_ALPHA`, others as `RGB`
pub fn write_pam<W: Write>(image: &Image, mut writer: W) -> Result<(), CliErrors> {
    let (depth, tuple_type) = if image.has_alpha() {
        (4, "RGB_ALPHA")
    } else {
        (3, "RGB")
    };
    let header = format!(
        "P7\nWIDTH {}\nHEIGHT {}\nDEPTH {}\nMAXVAL {}\nTUPLTYPE {}\nENDHDR\n",
        image.width(),
        image.height(),
        depth,
        255,
        tuple_type
    );
    writer.write_all(header.as_bytes())?;

    if image.has_alpha() {
        writer.write_all(image.as_rgba_bytes())?;
    } else {
        // drop the alpha byte of every pixel
        for row in image.rows() {
            let bytes: Vec<u8> = row.iter().flat_map(|p| [p.r, p.g, p.b]).collect();
            writer.write_all(&bytes)?;
        }
    }
    writer.flush()?;

    Ok(())
}

/// Create or truncate `path` and write `image` to it as PAM
pub fn write_pam_file<P: AsRef<Path>>(image: &Image, path: P) -> Result<(), CliErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path.as_ref())?;

    write_pam(image, BufWriter::new(file))?;
    trace!("Wrote {:?}", path.as_ref());

    Ok(())
}
