//! Flat symbol index to (row, column, channel).
//!
//! Symbols are laid out row-major with the channel varying fastest, so index
//! `x` lands on channel `x % channels` of pixel `x / channels`.

use super::CodecError;

/// Dimensions of a channel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    columns: usize,
    channels: usize,
}

impl Shape {
    /// Minimum channel count (R, G, B).
    pub const MIN_CHANNELS: usize = 3;

    /// Creates a shape; rows and columns must be non-zero and there must be
    /// at least three channels.
    pub fn new(rows: usize, columns: usize, channels: usize) -> Result<Self, CodecError> {
        if rows == 0 || columns == 0 || channels < Self::MIN_CHANNELS {
            return Err(CodecError::InvalidShape {
                rows,
                columns,
                channels,
            });
        }
        Ok(Self {
            rows,
            columns,
            channels,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total number of channel bytes.
    pub fn byte_count(&self) -> usize {
        self.rows * self.columns * self.channels
    }

    /// Offset of `(row, column, channel)` in a row-major byte slice.
    pub fn flat_index(&self, row: usize, column: usize, channel: usize) -> usize {
        (row * self.columns + column) * self.channels + channel
    }
}

/// Maps symbol index `x` to `(row, column, channel)`.
///
/// Indices past `shape.byte_count()` wrap around; callers stay below it.
pub fn map_index(shape: Shape, x: usize) -> (usize, usize, usize) {
    let i = (x / (shape.columns * shape.channels)) % shape.rows;
    let j = (x / shape.channels) % shape.columns;
    let k = x % shape.channels;
    (i, j, k)
}
