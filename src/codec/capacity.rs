//! How many characters an image carries and how wide its length header is.
//!
//! Three channels at 4 bits each give 12 bits, or 1.5 characters, per pixel.
//! The header width `len_all` (in symbols) is the smallest that can count up
//! to that raw figure; the header then costs `ceil(len_all / 2)` characters.
//!
//! Everything depends on rows and columns only, so the decoder derives the
//! same header width the encoder used.

use log::debug;

use super::nibble::Symbol;

/// Symbols needed per character.
pub const SYMBOLS_PER_CHAR: usize = 2;

/// Capacity plan for one image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    /// Header width in 4-bit symbols.
    pub len_all: usize,
    /// Largest message length, in characters, the image accepts.
    pub max_chars: usize,
    raw_halves: u128,
}

impl Capacity {
    /// Header width in bits.
    pub fn header_bits(&self) -> usize {
        self.len_all * Symbol::BITS
    }

    /// Symbols written for a message of `chars` characters, header included.
    pub fn symbols_needed(&self, chars: usize) -> usize {
        self.len_all + chars * SYMBOLS_PER_CHAR
    }

    /// Raw character capacity before the header is subtracted (1.5 per pixel).
    pub fn raw_chars(&self) -> f64 {
        self.raw_halves as f64 / 2.0
    }
}

/// Computes the capacity plan for a `rows` x `columns` image.
pub fn compute_capacity(rows: usize, columns: usize) -> Capacity {
    // Twice the raw capacity keeps 1.5 per pixel in integers.
    let raw_halves = 3 * rows as u128 * columns as u128;

    let mut len_all = 1;
    while 2 * header_max(len_all) < raw_halves {
        len_all += 1;
    }

    let max_chars = (raw_halves / 2).saturating_sub(len_all.div_ceil(2) as u128);
    let max_chars = usize::try_from(max_chars).unwrap_or(usize::MAX);

    debug!(
        "Capacity for {}x{}: header {} symbols, {} characters",
        rows, columns, len_all, max_chars
    );

    Capacity {
        len_all,
        max_chars,
        raw_halves,
    }
}

/// Largest count a header of `len_all` symbols can hold, `2^(4*len_all) - 1`.
fn header_max(len_all: usize) -> u128 {
    let bits = len_all * Symbol::BITS;
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Smallest L with 2^(4L) - 1 >= 1.5 * rows * columns, by brute force.
    fn reference_len_all(rows: usize, columns: usize) -> usize {
        let raw = 1.5 * rows as f64 * columns as f64;
        (1..).find(|&l| 2f64.powi(4 * l as i32) - 1.0 >= raw).unwrap()
    }

    #[test]
    fn test_ten_by_ten() {
        let capacity = compute_capacity(10, 10);
        assert_eq!(capacity.raw_chars(), 150.0);
        assert_eq!(capacity.len_all, 2);
        assert_eq!(capacity.max_chars, 149);
        assert_eq!(capacity.header_bits(), 8);
    }

    #[test]
    fn test_two_by_two() {
        let capacity = compute_capacity(2, 2);
        assert_eq!(capacity.raw_chars(), 6.0);
        assert_eq!(capacity.len_all, 1);
        assert_eq!(capacity.max_chars, 5);
    }

    #[test]
    fn test_header_boundaries() {
        // 10 pixels -> 15 characters, exactly 2^4 - 1
        assert_eq!(compute_capacity(1, 10).len_all, 1);
        // 11 pixels -> 16.5 characters, needs a second symbol
        assert_eq!(compute_capacity(1, 11).len_all, 2);
        // 170 pixels -> 255 characters, exactly 2^8 - 1
        assert_eq!(compute_capacity(10, 17).len_all, 2);
        assert_eq!(compute_capacity(1, 171).len_all, 3);
    }

    #[test]
    fn test_matches_reference() {
        for rows in 1..40 {
            for columns in (1..400).step_by(7) {
                assert_eq!(
                    compute_capacity(rows, columns).len_all,
                    reference_len_all(rows, columns),
                    "{}x{}",
                    rows,
                    columns
                );
            }
        }
    }

    #[test]
    fn test_fractional_capacity_rounds_down() {
        // 1x1 -> 1.5 raw, minus one header character leaves 0.5
        let capacity = compute_capacity(1, 1);
        assert_eq!(capacity.len_all, 1);
        assert_eq!(capacity.max_chars, 0);

        // 1x3 -> 4.5 raw, minus 1 = 3.5
        assert_eq!(compute_capacity(1, 3).max_chars, 3);
    }

    #[test]
    fn test_plan_fits_in_three_channels() {
        for rows in 1..30 {
            for columns in 1..30 {
                let capacity = compute_capacity(rows, columns);
                assert!(capacity.symbols_needed(capacity.max_chars) <= rows * columns * 3);
            }
        }
    }

    #[test]
    fn test_large_image() {
        let capacity = compute_capacity(4000, 6000);
        // 36M characters needs 7 symbols (2^28 - 1 >= 36M)
        assert_eq!(capacity.len_all, 7);
        assert_eq!(capacity.max_chars, 36_000_000 - 4);
    }
}
