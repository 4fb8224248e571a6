//! Left-to-right decoder, one character per step.
//!
//! Each step classifies the leading byte by its high-order bits, then folds
//! the six payload bits of every continuation byte into the code point, most
//! significant chunk first. The first malformed character ends iteration.

use alloc::string::String;
use core::{fmt, iter::FusedIterator};

use bstr::BStr;

use crate::{
    DecoderOptions,
    bits::{self, Width},
    error::{DecodeError, DecodeErrorKind},
};

/// Decodes `bytes` with strict [`DecoderOptions`].
///
/// ```rust
/// assert_eq!(utf8bits::decode(&[0xE2, 0x82, 0xAC]).unwrap(), "€");
/// assert!(utf8bits::decode(&[0xE2, 0x82]).is_err());
/// ```
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered.
pub fn decode(bytes: &[u8]) -> Result<String, DecodeError> {
    decode_with(bytes, DecoderOptions::default())
}

/// Decodes `bytes` with the given options.
///
/// # Errors
///
/// Returns the first [`DecodeError`] encountered.
pub fn decode_with(bytes: &[u8], options: DecoderOptions) -> Result<String, DecodeError> {
    Decoder::with_options(bytes, options).collect()
}

/// Iterator over the characters of a UTF-8 byte slice.
///
/// Yields `Ok(char)` for every well-formed character and a single `Err` at
/// the first malformed one, after which it returns `None`.
#[derive(Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    offset: usize,
    options: DecoderOptions,
    failed: bool,
}

impl<'a> Decoder<'a> {
    /// Create a decoder with strict options.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_options(bytes, DecoderOptions::default())
    }

    /// Create a decoder with the given options.
    #[must_use]
    pub fn with_options(bytes: &'a [u8], options: DecoderOptions) -> Self {
        Self {
            bytes,
            offset: 0,
            options,
            failed: false,
        }
    }

    /// Byte offset of the next character to decode.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes not yet consumed. After an error these start at the offending
    /// character.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.offset..]
    }

    /// Decodes the character starting at `self.offset`, returning it along
    /// with its encoded width.
    fn decode_char(&self) -> Result<(char, Width), DecodeError> {
        let start = self.offset;
        let lead = self.bytes[start];
        let Some(width) = Width::of_leading_byte(lead) else {
            return Err(DecodeError::new(
                DecodeErrorKind::InvalidStartByte(lead),
                start,
            ));
        };

        let mut code_point = width.leading_payload(lead);
        for at in start + 1..start + width.byte_len() {
            let Some(&byte) = self.bytes.get(at) else {
                return Err(DecodeError::new(
                    DecodeErrorKind::IncompleteSequence,
                    start,
                ));
            };
            if !self.options.allow_invalid_continuation && !bits::is_continuation(byte) {
                return Err(DecodeError::new(
                    DecodeErrorKind::InvalidContinuationByte(byte),
                    at,
                ));
            }
            code_point = bits::push_continuation(code_point, byte);
        }

        if !self.options.allow_overlong && code_point < width.min_code_point() {
            return Err(DecodeError::new(
                DecodeErrorKind::OverlongEncoding { code_point, width },
                start,
            ));
        }

        char::from_u32(code_point)
            .map(|ch| (ch, width))
            .ok_or(DecodeError::new(
                DecodeErrorKind::InvalidCodePoint(code_point),
                start,
            ))
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.bytes.len() {
            return None;
        }
        match self.decode_char() {
            Ok((ch, width)) => {
                self.offset += width.byte_len();
                Some(Ok(ch))
            }
            Err(err) => {
                log::trace!("utf8 decoder stopped: {err}");
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // An error may end iteration after any character.
        let remaining = self.bytes.len() - self.offset;
        (usize::from(remaining != 0), Some(remaining))
    }
}

impl FusedIterator for Decoder<'_> {}

impl fmt::Debug for Decoder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("offset", &self.offset)
            .field("remaining", &BStr::new(self.remaining()))
            .field("options", &self.options)
            .field("failed", &self.failed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec::Vec};

    use super::*;

    #[test]
    fn offset_tracks_character_boundaries() {
        let mut decoder = Decoder::new("aé€😀".as_bytes());
        let mut offsets = Vec::new();
        while let Some(ch) = decoder.next() {
            ch.unwrap();
            offsets.push(decoder.offset());
        }
        assert_eq!(offsets, [1, 3, 6, 10]);
    }

    #[test]
    fn fuses_after_first_error() {
        let mut decoder = Decoder::new(&[b'a', 0xFF, b'b']);
        assert_eq!(decoder.next(), Some(Ok('a')));
        assert!(matches!(decoder.next(), Some(Err(_))));
        assert_eq!(decoder.next(), None);
        assert_eq!(decoder.remaining(), &[0xFF, b'b']);
        assert_eq!(decoder.size_hint(), (0, Some(0)));
    }

    #[test]
    fn debug_shows_remaining_bytes_as_text() {
        let mut decoder = Decoder::new(b"ab");
        decoder.next();
        let rendered = format!("{decoder:?}");
        assert!(rendered.contains(r#"remaining: "b""#), "{rendered}");
    }
}
