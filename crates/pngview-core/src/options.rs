/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global decoder options

/// Decoder options
///
/// Options are set with the builder style `set_*` methods,
/// each of which consumes and returns the options
///
/// # Example
/// ```
/// use pngview_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_strict_mode(true);
///
/// assert_eq!(options.get_max_width(), 1024);
/// assert!(options.get_strict_mode());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:             usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:            usize,
    /// Whether the decoder should reject recoverable
    /// non-conformance, e.g palette indices past the palette end
    ///
    /// - Default value: false
    strict_mode:           bool,
    /// Whether the inflate step should confirm the zlib adler32
    /// checksum of the decompressed stream
    ///
    /// - Default value: true
    inflate_confirm_adler: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width:             1 << 14,
            max_height:            1 << 14,
            strict_mode:           false,
            inflate_confirm_adler: true
        }
    }
}

impl DecoderOptions {
    /// Create options suited for command line use
    ///
    /// - Do not confirm adler checksums
    /// - Lenient palette handling
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default().inflate_set_confirm_adler(false)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should treat recoverable
    /// non-conformance as an error
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Whether the inflate decoder should confirm the adler32 checksum
    pub const fn inflate_get_confirm_adler(&self) -> bool {
        self.inflate_confirm_adler
    }

    /// Set whether the inflate decoder should confirm the adler32 checksum
    pub fn inflate_set_confirm_adler(mut self, yes: bool) -> Self {
        self.inflate_confirm_adler = yes;
        self
    }
}
