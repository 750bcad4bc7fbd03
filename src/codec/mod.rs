//! The nibble codec: text to 4-bit symbols and back.
//!
//! - [`bits`]: text <-> bit sequence (8 bits per character, MSB first)
//! - [`nibble`]: embed/extract a symbol in the low nibble of a channel byte
//! - [`capacity`]: header width and character capacity for an image size
//! - [`address`]: flat symbol index -> (row, column, channel)

pub mod address;
pub mod bits;
pub mod capacity;
pub mod nibble;

pub use address::{map_index, Shape};
pub use bits::{decode_text, encode_text};
pub use capacity::{compute_capacity, Capacity};
pub use nibble::{embed, extract, Symbol};

use thiserror::Error;

/// Errors raised by the codec primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Character {ch:?} at position {position} does not fit in 8 bits")]
    UnsupportedCharacter { ch: char, position: usize },

    #[error("Malformed bit string: unexpected {found:?} at position {position}")]
    MalformedInput { found: char, position: usize },

    #[error("Invalid image shape {rows}x{columns}x{channels}: need non-zero rows and columns and at least 3 channels")]
    InvalidShape {
        rows: usize,
        columns: usize,
        channels: usize,
    },

    #[error("Buffer holds {actual} bytes but shape needs {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}
