//! The 64-symbol alphabet and the crypt-style byte encoding built on it.
//!
//! This is *not* RFC 4648 base64: the symbol order differs (`.` and `/`
//! come first) and bits are taken from the least significant end of each
//! little-endian 24-bit group. No padding characters are ever emitted.

/// Symbol table; a symbol's index is the 6-bit value it encodes.
pub const ITOA64: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

/// Reverse lookup: byte -> 6-bit value, [`INVALID`] for bytes outside the alphabet.
const ATOI64: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ITOA64.len() {
        table[ITOA64[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the symbol for the low 6 bits of `value`.
#[inline]
#[must_use]
pub const fn symbol(value: u32) -> u8 {
    ITOA64[(value & 0x3F) as usize]
}

/// Returns the position of `symbol` in the alphabet, if it belongs to it.
#[inline]
#[must_use]
pub const fn position(symbol: u8) -> Option<u32> {
    match ATOI64[symbol as usize] {
        INVALID => None,
        value => Some(value as u32),
    }
}

/// Number of characters [`encode`] produces for `len` input bytes.
#[inline]
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    (len * 8).div_ceil(6)
}

/// Encodes `input` three bytes at a time into four symbols.
///
/// A trailing group of one or two bytes yields two or three symbols, so the
/// output length is always [`encoded_len`] of the input length.
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let mut output = String::with_capacity(encoded_len(input.len()));

    for chunk in input.chunks(3) {
        let value = chunk.iter().enumerate().fold(0u32, |acc, (i, &byte)| acc | (u32::from(byte) << (8 * i)));

        // one symbol per started 6-bit group
        for group in 0..=chunk.len() {
            output.push(char::from(symbol(value >> (6 * group))));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_roundtrips_every_symbol() {
        for (i, &c) in ITOA64.iter().enumerate() {
            assert_eq!(position(c), Some(i as u32));
            assert_eq!(symbol(i as u32), c);
        }
    }

    #[test]
    fn test_position_rejects_foreign_bytes() {
        for c in [b'$', b'+', b'=', b'-', b'_', b' ', 0u8, 0xFF] {
            assert_eq!(position(c), None);
        }
    }

    #[test]
    fn test_encode_known_groups() {
        assert_eq!(encode(&[0xFF, 0xFF, 0xFF]), "zzzz");
        assert_eq!(encode(&[0x01, 0x02, 0x03]), "/6k.");
        assert_eq!(encode(&[0x00, 0x01, 0x02, 0x03, 0x04, 0x05]), ".2U.1EE/");
        assert_eq!(encode(b"abcdef"), "V7qMYJaN");
    }

    #[test]
    fn test_encode_partial_groups() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[0x3F]), "z.");
        assert_eq!(encode(&[0x00, 0xFF]), ".wD");
    }

    #[test]
    fn test_encode_digest_lengths() {
        assert_eq!(encode(&[0u8; 16]).len(), 22);
        assert_eq!(encode(&[0u8; 64]).len(), 86);
        assert_eq!(encode(&[0u8; 6]).len(), 8);
        for len in 0..70 {
            assert_eq!(encode(&vec![0xA5; len]).len(), encoded_len(len));
        }
    }
}
