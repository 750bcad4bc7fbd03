//! Low-nibble embedding into a single channel byte.

use std::fmt;

/// A 4-bit value, the unit written into one channel byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Symbol(u8);

impl Symbol {
    /// Largest symbol value.
    pub const MAX: u8 = 0x0F;

    /// Bits carried by one symbol.
    pub const BITS: usize = 4;

    /// Returns `None` when `value` does not fit in 4 bits.
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Builds a symbol from up to 4 big-endian bits.
    pub fn from_bits(bits: &[bool]) -> Self {
        let value = bits
            .iter()
            .take(Self::BITS)
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The symbol as 4 big-endian bits.
    pub fn to_bits(self) -> [bool; 4] {
        [
            self.0 & 0b1000 != 0,
            self.0 & 0b0100 != 0,
            self.0 & 0b0010 != 0,
            self.0 & 0b0001 != 0,
        ]
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}

/// Replaces the low nibble of `byte` with `symbol`.
///
/// Keeps the overflow guard of the original carrier format: a result above
/// 255 drops by 16. With a 4-bit symbol the sum tops out at 240 + 15.
pub fn embed(byte: u8, symbol: Symbol) -> u8 {
    let mut color = u16::from(byte);
    color -= color % 16;
    color += u16::from(symbol.value());

    if color > 255 {
        color -= 16;
    }

    color as u8
}

/// Reads the low nibble of `byte`.
pub fn extract(byte: u8) -> Symbol {
    Symbol(byte % 16)
}
