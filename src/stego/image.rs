//! Nibble steganography for images.
//!
//! Hides text in the low 4 bits of channel bytes.
//! Supports PNG and BMP images (lossless formats only).
//!
//! Format: [header: `len_all` symbols holding the character count] + [2 symbols per character]
//! Symbols are written one per channel byte in row-major order, see
//! [`map_index`](crate::codec::map_index).

use std::ops::Range;
use std::path::Path;

use log::{debug, info, warn};
use thiserror::Error;

use super::buffer::ChannelBuffer;
use super::io::{ensure_lossless, read_image, read_text, write_image};
use crate::codec::bits::{push_bits, read_bits};
use crate::codec::{compute_capacity, decode_text, embed, encode_text, extract, map_index};
use crate::codec::{Capacity, CodecError, Symbol};

/// Number of chunks the bulk text-file writer splits the symbol stream into.
pub const DEFAULT_CHUNKS: usize = 100;

/// Errors that can occur during image steganography.
#[derive(Error, Debug)]
pub enum ImageStegoError {
    #[error("Message too large: {needed} characters, image holds at most {capacity}")]
    MessageTooLarge { needed: usize, capacity: usize },

    #[error("No message found: header declares {declared} characters but image holds at most {capacity}")]
    HeaderOutOfRange { declared: u64, capacity: usize },

    #[error("Refusing to write {0}: only PNG and BMP preserve the hidden data")]
    LossyFormat(String),

    #[error("Cannot store {0} channels in an image file")]
    UnsupportedChannels(usize),

    #[error("Image load error: {0}")]
    ImageLoadError(String),

    #[error("Image save error: {0}")]
    ImageSaveError(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Summary of a successful encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeReport {
    pub capacity: Capacity,
    /// Characters written.
    pub characters: usize,
    /// Channel bytes touched, header included.
    pub symbols_written: usize,
}

/// Hides `text` in `buffer`.
///
/// Nothing is written unless the whole message fits: an oversized message
/// fails with `MessageTooLarge` and leaves the buffer untouched.
pub fn encode_message(
    buffer: &mut ChannelBuffer,
    text: &str,
) -> Result<EncodeReport, ImageStegoError> {
    let (report, symbols) = prepare_symbols(buffer, text)?;
    write_symbols(buffer, 0, &symbols);

    info!(
        "Encoded {} characters into {} channel bytes",
        report.characters, report.symbols_written
    );
    Ok(report)
}

/// Same output as [`encode_message`], written in `chunks` contiguous runs.
///
/// Chunk boundaries fall on whole symbols; the last run takes the remainder.
pub fn encode_message_chunked(
    buffer: &mut ChannelBuffer,
    text: &str,
    chunks: usize,
) -> Result<EncodeReport, ImageStegoError> {
    let (report, symbols) = prepare_symbols(buffer, text)?;

    let ranges = chunk_ranges(symbols.len(), chunks);
    debug!("Writing {} symbols in {} chunks", symbols.len(), ranges.len());
    for range in ranges {
        write_symbols(buffer, range.start, &symbols[range]);
    }

    info!(
        "Encoded {} characters into {} channel bytes",
        report.characters, report.symbols_written
    );
    Ok(report)
}

/// Reads the UTF-8 file at `text_path` and hides its contents in `buffer`
/// using the chunked writer.
pub fn write_text_file<P: AsRef<Path>>(
    text_path: P,
    buffer: &mut ChannelBuffer,
    chunks: usize,
) -> Result<EncodeReport, ImageStegoError> {
    let text = read_text(text_path)?;
    encode_message_chunked(buffer, &text, chunks)
}

/// Recovers the message hidden in `buffer`.
///
/// A header larger than the image capacity cannot come from
/// [`encode_message`] and fails with `HeaderOutOfRange`.
pub fn decode_message(buffer: &ChannelBuffer) -> Result<String, ImageStegoError> {
    let (capacity, declared) = read_header(buffer);

    if declared > capacity.max_chars as u64 {
        return Err(ImageStegoError::HeaderOutOfRange {
            declared,
            capacity: capacity.max_chars,
        });
    }

    let chars = declared as usize;
    let payload = read_symbols(buffer, capacity.len_all..capacity.symbols_needed(chars));
    let bits: Vec<bool> = payload.iter().flat_map(|s| s.to_bits()).collect();

    debug!("Decoded header: {} characters", chars);
    Ok(decode_text(&bits))
}

/// Returns the capacity plan for `buffer` and the character count its
/// header declares.
pub fn read_header(buffer: &ChannelBuffer) -> (Capacity, u64) {
    let shape = buffer.shape();
    let capacity = compute_capacity(shape.rows(), shape.columns());

    let header: Vec<bool> = read_symbols(buffer, 0..capacity.len_all)
        .iter()
        .flat_map(|s| s.to_bits())
        .collect();

    (capacity, read_bits(&header))
}

/// Extracts the symbols at flat indices `range`.
pub fn read_symbols(buffer: &ChannelBuffer, range: Range<usize>) -> Vec<Symbol> {
    let shape = buffer.shape();
    range
        .map(|x| {
            let (i, j, k) = map_index(shape, x);
            extract(buffer.get(i, j, k))
        })
        .collect()
}

/// Hides `text` in the image at `input` and saves the result to `output`.
///
/// The output path is checked before any work, and nothing is written when
/// the message is rejected.
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    text: &str,
) -> Result<EncodeReport, ImageStegoError> {
    ensure_lossless(output.as_ref())?;
    let mut buffer = read_image(input)?;
    let report = encode_message(&mut buffer, text)?;
    write_image(output, &buffer)?;
    Ok(report)
}

/// Recovers the message hidden in the image at `path`.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<String, ImageStegoError> {
    let buffer = read_image(path)?;
    decode_message(&buffer)
}

/// Hides the contents of `text_path` in the image at `input` and saves the
/// result to `output`.
pub fn embed_text_file<P: AsRef<Path>, T: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    text_path: T,
    output: Q,
    chunks: usize,
) -> Result<EncodeReport, ImageStegoError> {
    ensure_lossless(output.as_ref())?;
    let mut buffer = read_image(input)?;
    let report = write_text_file(text_path, &mut buffer, chunks)?;
    write_image(output, &buffer)?;
    Ok(report)
}

/// Validates the message against the buffer and builds the full symbol
/// stream (header followed by payload).
fn prepare_symbols(
    buffer: &ChannelBuffer,
    text: &str,
) -> Result<(EncodeReport, Vec<Symbol>), ImageStegoError> {
    let shape = buffer.shape();
    let capacity = compute_capacity(shape.rows(), shape.columns());

    let needed = text.chars().count();
    if needed > capacity.max_chars {
        warn!(
            "Message of {} characters exceeds capacity of {}",
            needed, capacity.max_chars
        );
        return Err(ImageStegoError::MessageTooLarge {
            needed,
            capacity: capacity.max_chars,
        });
    }

    let payload = encode_text(text)?;
    let mut bits = Vec::with_capacity(capacity.header_bits() + payload.len());
    push_bits(&mut bits, needed as u64, capacity.header_bits());
    bits.extend(payload);

    // Trailing bits short of a full symbol are dropped
    let symbols: Vec<Symbol> = bits.chunks_exact(Symbol::BITS).map(Symbol::from_bits).collect();

    let report = EncodeReport {
        capacity,
        characters: needed,
        symbols_written: symbols.len(),
    };
    Ok((report, symbols))
}

/// Embeds `symbols` starting at flat index `start`.
fn write_symbols(buffer: &mut ChannelBuffer, start: usize, symbols: &[Symbol]) {
    let shape = buffer.shape();
    for (offset, &symbol) in symbols.iter().enumerate() {
        let (i, j, k) = map_index(shape, start + offset);
        let byte = buffer.get(i, j, k);
        buffer.set(i, j, k, embed(byte, symbol));
    }
}

/// Splits `0..total` into at most `chunks` contiguous ranges of equal length,
/// the last one absorbing the remainder.
fn chunk_ranges(total: usize, chunks: usize) -> Vec<Range<usize>> {
    let chunks = chunks.max(1);
    let step = (total / chunks).max(1);

    let mut ranges = Vec::with_capacity(chunks.min(total));
    let mut start = 0;
    while start < total {
        let end = if ranges.len() + 1 == chunks {
            total
        } else {
            (start + step).min(total)
        };
        ranges.push(start..end);
        start = end;
    }
    ranges
}
