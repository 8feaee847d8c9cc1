//! zlib wrapping of frames, as found in loose object files
//!
//! Compression sits outside the codec: frames are compressed after
//! `frame` and inflated before `deframe`.

use anyhow::Context;
use bytes::Bytes;
use std::io::{Read, Write};

/// First byte of a zlib stream with the usual 32K window
const ZLIB_MAGIC: u8 = 0x78;

/// Whether `data` looks like a zlib stream rather than a raw frame
///
/// Raw frames start with a lowercase kind name, never with `x`.
pub fn is_compressed(data: &[u8]) -> bool {
    data.first() == Some(&ZLIB_MAGIC)
}

pub fn compress(data: &[u8]) -> anyhow::Result<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(data)
        .context("Unable to compress object content")?;

    encoder
        .finish()
        .map(|compressed_content| compressed_content.into())
        .context("Unable to finish compressing object content")
}

pub fn decompress(data: &[u8]) -> anyhow::Result<Bytes> {
    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut decompressed_content = Vec::new();
    decoder
        .read_to_end(&mut decompressed_content)
        .context("Unable to decompress object content")?;

    Ok(decompressed_content.into())
}
