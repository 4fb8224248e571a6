use thiserror::Error;

use crate::bits::{BitPattern, Width};

/// Error returned when a byte sequence is not well-formed UTF-8.
///
/// Decoding stops at the first malformed character; no partial output is
/// returned alongside the error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct DecodeError {
    pub(crate) kind: DecodeErrorKind,
    pub(crate) offset: usize,
}

impl DecodeError {
    pub(crate) const fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// What went wrong.
    #[must_use]
    pub const fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Byte offset of the offending character.
    ///
    /// For [`DecodeErrorKind::InvalidContinuationByte`] this is the offset of
    /// the continuation byte itself.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// Classification of a [`DecodeError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The input ended before every continuation byte of the last character
    /// was read.
    #[error("incomplete UTF-8 byte sequence")]
    IncompleteSequence,
    /// The leading byte matches none of the four width prefixes.
    #[error("invalid UTF-8 start pattern: {}", BitPattern::of(.0))]
    InvalidStartByte(u8),
    /// A continuation byte lacks the `10xx_xxxx` prefix.
    #[error("invalid UTF-8 continuation byte: {}", BitPattern::of(.0))]
    InvalidContinuationByte(u8),
    /// The character was encoded with more bytes than necessary.
    #[error("overlong {}-byte encoding of U+{code_point:04X}", .width.byte_len())]
    OverlongEncoding {
        /// Decoded value.
        code_point: u32,
        /// Width actually used.
        width: Width,
    },
    /// The decoded value is a surrogate or lies beyond U+10FFFF.
    #[error("invalid code point U+{0:04X}")]
    InvalidCodePoint(u32),
}
