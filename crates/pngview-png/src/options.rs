/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::debug;
use pngview_core::options::DecoderOptions;
use zune_inflate::{DeflateDecoder, DeflateOptions};

use crate::error::PngDecodeErrors;

/// Decompresses the concatenated IDAT payload
///
/// Receives the zlib stream, the decoder options and the expected
/// decompressed size (filter bytes included), and returns the
/// decompressed bytes
pub type InflateHandler = fn(
    data: &[u8],
    options: &DecoderOptions,
    size_hint: usize
) -> Result<Vec<u8>, PngDecodeErrors>;

/// Largest output a deflate stream can produce per input byte
const MAX_DEFLATE_RATIO: usize = 1032;

/// Inflate a zlib stream with `zune-inflate`
pub fn default_inflate_handler(
    data: &[u8], options: &DecoderOptions, size_hint: usize
) -> Result<Vec<u8>, PngDecodeErrors> {
    // deflate doesn't store its uncompressed size, so give it a hint
    // and let the decoder resize at will
    let size_hint = size_hint.min(data.len().saturating_mul(MAX_DEFLATE_RATIO));

    let option = DeflateOptions::default()
        .set_size_hint(size_hint)
        .set_confirm_checksum(options.inflate_get_confirm_adler());

    let mut decoder = DeflateDecoder::new_with_options(data, option);

    let inflated = decoder
        .decode_zlib()
        .map_err(|e| PngDecodeErrors::DecompressionError(format!("{e:?}").trim_end().to_string()))?;

    debug!(
        "Inflated {} bytes into {} bytes",
        data.len(),
        inflated.len()
    );
    Ok(inflated)
}
