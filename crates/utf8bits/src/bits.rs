//! Shift/mask helpers shared by the decoder and the encoder.
//!
//! Layout of a single encoded character:
//!
//! | width | leading byte | continuation bytes | payload bits |
//! |-------|--------------|--------------------|--------------|
//! | 1     | `0xxx_xxxx`  | -                  | 7            |
//! | 2     | `110x_xxxx`  | `10xx_xxxx`        | 11           |
//! | 3     | `1110_xxxx`  | `10xx_xxxx` x 2    | 16           |
//! | 4     | `1111_0xxx`  | `10xx_xxxx` x 3    | 21           |

use core::fmt;

/// Payload bits carried by every continuation byte.
pub(crate) const CONTINUATION_BITS: u32 = 6;

const CONTINUATION_MASK: u8 = 0b0011_1111;
const CONTINUATION_TAG: u8 = 0b1000_0000;

/// Number of bytes used to encode one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// `0xxx_xxxx`
    One = 1,
    /// `110x_xxxx 10xx_xxxx`
    Two = 2,
    /// `1110_xxxx 10xx_xxxx 10xx_xxxx`
    Three = 3,
    /// `1111_0xxx 10xx_xxxx 10xx_xxxx 10xx_xxxx`
    Four = 4,
}

impl Width {
    /// Classifies a leading byte by its run of high-order one bits.
    ///
    /// Returns `None` for a lone continuation byte (`10xx_xxxx`) and for
    /// anything starting with five or more one bits (`1111_1xxx`).
    #[must_use]
    pub const fn of_leading_byte(byte: u8) -> Option<Self> {
        match byte.leading_ones() {
            0 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Picks the minimal width able to hold `code_point`.
    ///
    /// Values at or above `0x1_0000` all map to [`Width::Four`]; the caller
    /// is responsible for keeping them below `0x11_0000`.
    #[must_use]
    pub const fn of_code_point(code_point: u32) -> Self {
        match code_point {
            0..0x80 => Self::One,
            0x80..0x800 => Self::Two,
            0x800..0x1_0000 => Self::Three,
            _ => Self::Four,
        }
    }

    /// Total encoded length in bytes.
    #[must_use]
    pub const fn byte_len(self) -> usize {
        self as usize
    }

    /// Smallest code point that must be encoded with this width.
    ///
    /// Anything below it decoded at this width is an overlong encoding.
    #[must_use]
    pub const fn min_code_point(self) -> u32 {
        match self {
            Self::One => 0,
            Self::Two => 0x80,
            Self::Three => 0x800,
            Self::Four => 0x1_0000,
        }
    }

    /// Number of continuation bytes following the leading byte.
    pub(crate) const fn continuation_len(self) -> usize {
        self.byte_len() - 1
    }

    /// Fixed high-order bits of the leading byte.
    const fn prefix(self) -> u8 {
        match self {
            Self::One => 0b0000_0000,
            Self::Two => 0b1100_0000,
            Self::Three => 0b1110_0000,
            Self::Four => 0b1111_0000,
        }
    }

    /// Mask selecting the payload bits of the leading byte.
    const fn leading_mask(self) -> u8 {
        match self {
            Self::One => 0b0111_1111,
            Self::Two => 0b0001_1111,
            Self::Three => 0b0000_1111,
            Self::Four => 0b0000_0111,
        }
    }

    /// Extracts the payload of a leading byte already classified as `self`.
    pub(crate) const fn leading_payload(self, byte: u8) -> u32 {
        (byte & self.leading_mask()) as u32
    }

    /// Builds the leading byte from the bits of `code_point` left over once
    /// every continuation chunk has been split off.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) const fn leading_byte(self, code_point: u32) -> u8 {
        let shift = CONTINUATION_BITS * self.continuation_len() as u32;
        ((code_point >> shift) as u8 & self.leading_mask()) | self.prefix()
    }
}

/// Whether `byte` carries the `10xx_xxxx` continuation prefix.
pub(crate) const fn is_continuation(byte: u8) -> bool {
    byte & !CONTINUATION_MASK == CONTINUATION_TAG
}

/// Appends the low six bits of a continuation byte to `acc`.
pub(crate) const fn push_continuation(acc: u32, byte: u8) -> u32 {
    (acc << CONTINUATION_BITS) | (byte & CONTINUATION_MASK) as u32
}

/// Builds the continuation byte holding the six bits of `code_point` that
/// sit `shift` bits above the least significant one.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn continuation_byte(code_point: u32, shift: u32) -> u8 {
    ((code_point >> shift) as u8 & CONTINUATION_MASK) | CONTINUATION_TAG
}

/// Displays a byte as binary digits grouped in nibbles, e.g. `1111_1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BitPattern(pub u8);

impl BitPattern {
    pub(crate) const fn of(byte: &u8) -> Self {
        Self(*byte)
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}_{:04b}", self.0 >> 4, self.0 & 0x0F)
    }
}
