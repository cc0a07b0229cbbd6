/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use core::fmt::{Debug, Display, Formatter};

/// Errors raised by the routines in this crate
pub enum ImageOpsErrors {
    /// Scale factor is zero, negative or not finite
    InvalidScale(f64),
    /// The operation needs at least one pixel
    EmptyImage,
    Generic(String)
}

impl Debug for ImageOpsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidScale(factor) => {
                writeln!(
                    f,
                    "Invalid scale factor {factor}, expected a finite number greater than zero"
                )
            }
            Self::EmptyImage => writeln!(f, "Image has no pixels"),
            Self::Generic(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for ImageOpsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for ImageOpsErrors {}

impl From<String> for ImageOpsErrors {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}
