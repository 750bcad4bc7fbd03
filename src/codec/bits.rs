//! Text <-> bit sequence conversion.
//!
//! Each character is one 8-bit unit, most significant bit first. Only code
//! points up to U+00FF are representable.
//!
//! Decoding consumes whole 8-bit groups; a trailing partial group is dropped.

use super::CodecError;

/// Bits per encoded character.
pub const BITS_PER_CHAR: usize = 8;

/// Encodes `text` as 8 bits per character.
///
/// Returns `UnsupportedCharacter` for anything above U+00FF rather than
/// truncating its code point.
pub fn encode_text(text: &str) -> Result<Vec<bool>, CodecError> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);
    for (position, ch) in text.chars().enumerate() {
        let code = u32::from(ch);
        if code > u32::from(u8::MAX) {
            return Err(CodecError::UnsupportedCharacter { ch, position });
        }
        push_bits(&mut bits, u64::from(code), BITS_PER_CHAR);
    }
    Ok(bits)
}

/// Decodes consecutive 8-bit groups back into characters.
pub fn decode_text(bits: &[bool]) -> String {
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|unit| char::from(read_bits(unit) as u8))
        .collect()
}

/// Appends `value` as a `width`-bit big-endian field.
///
/// Bits above position 63 are written as zero.
pub fn push_bits(bits: &mut Vec<bool>, value: u64, width: usize) {
    bits.extend((0..width).rev().map(|shift| {
        let shifted = u32::try_from(shift)
            .ok()
            .and_then(|s| value.checked_shr(s))
            .unwrap_or(0);
        shifted & 1 == 1
    }));
}

/// Reads a big-endian field. Only the low 64 bits survive for wider input.
pub fn read_bits(bits: &[bool]) -> u64 {
    bits.iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}

/// Renders bits as a `'0'`/`'1'` string.
pub fn to_bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Parses a `'0'`/`'1'` string.
pub fn parse_bit_string(s: &str) -> Result<Vec<bool>, CodecError> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(CodecError::MalformedInput { found, position }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_characters() {
        let bits = encode_text("hi").unwrap();
        assert_eq!(to_bit_string(&bits), "0110100001101001");
    }

    #[test]
    fn test_encode_length_is_eight_per_char() {
        let text = "Hello, world!";
        assert_eq!(encode_text(text).unwrap().len(), text.len() * BITS_PER_CHAR);
        assert!(encode_text("").unwrap().is_empty());
    }

    #[test]
    fn test_latin1_roundtrip() {
        let text: String = (0u8..=255).map(char::from).collect();
        let bits = encode_text(&text).unwrap();
        assert_eq!(decode_text(&bits), text);
    }

    #[test]
    fn test_rejects_wide_characters() {
        let err = encode_text("ab\u{20ac}").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnsupportedCharacter {
                ch: '\u{20ac}',
                position: 2
            }
        );
    }

    #[test]
    fn test_decode_drops_partial_group() {
        let mut bits = encode_text("ok").unwrap();
        bits.extend([true, false, true]);
        assert_eq!(decode_text(&bits), "ok");

        // Fewer than 8 bits decodes to nothing
        assert_eq!(decode_text(&[true; 7]), "");
    }

    #[test]
    fn test_fixed_width_fields() {
        let mut bits = Vec::new();
        push_bits(&mut bits, 5, 8);
        assert_eq!(to_bit_string(&bits), "00000101");
        assert_eq!(read_bits(&bits), 5);

        let mut wide = Vec::new();
        push_bits(&mut wide, u64::MAX, 68);
        assert_eq!(wide.len(), 68);
        assert!(wide[..4].iter().all(|&b| !b));
        assert_eq!(read_bits(&wide), u64::MAX);
    }

    #[test]
    fn test_parse_bit_string() {
        assert_eq!(parse_bit_string("1010").unwrap(), vec![true, false, true, false]);
        assert_eq!(
            parse_bit_string("10x1").unwrap_err(),
            CodecError::MalformedInput {
                found: 'x',
                position: 2
            }
        );
    }
}
