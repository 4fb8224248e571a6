//! Encoder: distributes the bits of each code point over a leading byte and
//! up to three continuation bytes.

use alloc::vec::Vec;
use core::ops::Deref;

use crate::bits::{self, CONTINUATION_BITS, Width};

/// Encodes `text` into a freshly allocated byte vector.
///
/// ```rust
/// assert_eq!(utf8bits::encode("é"), [0xC3, 0xA9]);
/// ```
#[must_use]
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    encode_into(text, &mut out);
    out
}

/// Appends the encoding of `text` to `out`.
pub fn encode_into(text: &str, out: &mut Vec<u8>) {
    out.reserve(text.len());
    for ch in text.chars() {
        out.extend_from_slice(&encode_char(ch));
    }
}

/// Encodes a single character.
#[must_use]
pub fn encode_char(ch: char) -> EncodedChar {
    let code_point = u32::from(ch);
    let width = Width::of_code_point(code_point);
    let mut bytes = [0; 4];
    bytes[0] = width.leading_byte(code_point);
    let mut shift = 0;
    for slot in bytes[1..width.byte_len()].iter_mut().rev() {
        *slot = bits::continuation_byte(code_point, shift);
        shift += CONTINUATION_BITS;
    }
    EncodedChar { bytes, width }
}

/// The 1 to 4 bytes encoding one character, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedChar {
    bytes: [u8; 4],
    width: Width,
}

impl EncodedChar {
    /// Width of the encoding.
    #[must_use]
    pub fn width(&self) -> Width {
        self.width
    }
}

impl Deref for EncodedChar {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.width.byte_len()]
    }
}

impl AsRef<[u8]> for EncodedChar {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_char_exposes_only_used_bytes() {
        let encoded = encode_char('A');
        assert_eq!(encoded.width(), Width::One);
        assert_eq!(&*encoded, b"A");

        let encoded = encode_char('\u{1F600}');
        assert_eq!(encoded.width(), Width::Four);
        assert_eq!(encoded.as_ref(), [0xF0, 0x9F, 0x98, 0x80]);
    }

    #[test]
    fn encode_into_appends() {
        let mut out = b"prefix:".to_vec();
        encode_into("ü", &mut out);
        assert_eq!(out, b"prefix:\xC3\xBC");
    }
}
