/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::env::temp_dir;
use std::time::UNIX_EPOCH;

use log::debug;
use pngview_core::image::Image;

use crate::errors::CliErrors;
use crate::file_io::write_pam_file;

/// Write `image` to a temporary file and open it with the platform's
/// default viewer
pub fn open_in_default_app(image: &Image) -> Result<(), CliErrors> {
    let time = std::time::SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();

    let mut path = temp_dir();

    path.push(format!("pngview-{time}.pam"));

    write_pam_file(image, &path)?;
    debug!("Opening {:?}", path);

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(&path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(&path)
            .spawn()?;
    }
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(&path).spawn()?;
    }
    Ok(())
}
