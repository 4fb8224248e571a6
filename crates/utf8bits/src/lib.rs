//! A UTF-8 codec written with plain shifts and masks.
//!
//! [`decode`] turns bytes into text and [`encode`] turns text into bytes.
//! Both are pure functions; the [`Decoder`] iterator exposes decoding one
//! character at a time.
//!
//! ```rust
//! let bytes = utf8bits::encode("A€😀");
//! assert_eq!(bytes, b"A\xE2\x82\xAC\xF0\x9F\x98\x80");
//! assert_eq!(utf8bits::decode(&bytes).unwrap(), "A€😀");
//! ```
//!
//! By default the decoder is strict: continuation bytes must carry the
//! `10xx_xxxx` prefix and overlong encodings are rejected. See
//! [`DecoderOptions`] to relax either check.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bits;
mod decoder;
mod encoder;
mod error;
mod options;

#[cfg(test)]
mod tests;

pub use bits::Width;
pub use decoder::{Decoder, decode, decode_with};
pub use encoder::{EncodedChar, encode, encode_char, encode_into};
pub use error::{DecodeError, DecodeErrorKind};
pub use options::DecoderOptions;
