//! Typed 3-D channel buffer.

use crate::codec::{CodecError, Shape};

/// Image pixels as `rows x columns x channels` bytes, row-major with the
/// channel innermost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelBuffer {
    shape: Shape,
    data: Vec<u8>,
}

impl ChannelBuffer {
    /// Wraps `data`, which must hold exactly `shape.byte_count()` bytes.
    pub fn new(shape: Shape, data: Vec<u8>) -> Result<Self, CodecError> {
        if data.len() != shape.byte_count() {
            return Err(CodecError::BufferSizeMismatch {
                expected: shape.byte_count(),
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// A buffer with every byte set to `value`.
    pub fn filled(shape: Shape, value: u8) -> Self {
        Self {
            shape,
            data: vec![value; shape.byte_count()],
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn get(&self, row: usize, column: usize, channel: usize) -> u8 {
        self.data[self.shape.flat_index(row, column, channel)]
    }

    pub fn set(&mut self, row: usize, column: usize, channel: usize, value: u8) {
        let index = self.shape.flat_index(row, column, channel);
        self.data[index] = value;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_must_match_shape() {
        let shape = Shape::new(2, 2, 3).unwrap();
        assert!(ChannelBuffer::new(shape, vec![0; 12]).is_ok());
        assert_eq!(
            ChannelBuffer::new(shape, vec![0; 11]).unwrap_err(),
            CodecError::BufferSizeMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_get_set() {
        let shape = Shape::new(2, 3, 4).unwrap();
        let mut buffer = ChannelBuffer::filled(shape, 7);
        buffer.set(1, 2, 3, 99);
        assert_eq!(buffer.get(1, 2, 3), 99);
        assert_eq!(buffer.get(0, 0, 0), 7);
        assert_eq!(buffer.as_bytes()[23], 99);
    }
}
