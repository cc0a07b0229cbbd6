/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use pngview_imageprocs::errors::ImageOpsErrors;
use pngview_png::error::PngDecodeErrors;

/// Everything that can stop a command line run
pub enum CliErrors {
    IoErrors(std::io::Error),
    DecodeErrors(PngDecodeErrors),
    OperationsErrors(ImageOpsErrors),
    Generic(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::DecodeErrors(err) => writeln!(f, "Could not decode png: {err:?}"),
            Self::OperationsErrors(err) => writeln!(f, "Image operation failed: {err:?}"),
            Self::Generic(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for CliErrors {}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<PngDecodeErrors> for CliErrors {
    fn from(value: PngDecodeErrors) -> Self {
        Self::DecodeErrors(value)
    }
}

impl From<ImageOpsErrors> for CliErrors {
    fn from(value: ImageOpsErrors) -> Self {
        Self::OperationsErrors(value)
    }
}

impl From<serde_json::Error> for CliErrors {
    fn from(value: serde_json::Error) -> Self {
        Self::Generic(format!("Could not serialize metadata: {value}"))
    }
}
