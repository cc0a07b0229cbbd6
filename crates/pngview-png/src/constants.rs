/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The eight bytes every png stream starts with
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Length + chunk type + crc, the bytes a chunk carries besides its payload
pub const CHUNK_OVERHEAD: usize = 12;

/// Exact payload length of an IHDR chunk
pub const IHDR_LENGTH: usize = 13;

/// Maximum number of palette entries an 8 bit index can address
pub const MAX_PALETTE_ENTRIES: usize = 256;
