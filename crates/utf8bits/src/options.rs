/// Configuration options for the decoder.
///
/// The defaults describe a strict decoder that accepts exactly the byte
/// sequences `core::str::from_utf8` accepts. Each option relaxes one check.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Whether to accept continuation bytes that lack the `10xx_xxxx` prefix.
    ///
    /// When `true`, only the low six bits of each byte following a leading
    /// byte are read, whatever its two high bits are.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_invalid_continuation: bool,

    /// Whether to accept characters encoded with more bytes than necessary.
    ///
    /// # Examples
    ///
    /// `C0 80` decodes to U+0000 when this is `true`, and fails with
    /// [`DecodeErrorKind::OverlongEncoding`](crate::DecodeErrorKind::OverlongEncoding)
    /// otherwise.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_overlong: bool,
}

impl DecoderOptions {
    /// Options that only check the structure of each character: a valid
    /// leading byte followed by enough bytes.
    ///
    /// Surrogates and values beyond U+10FFFF are still rejected since they
    /// have no `char` representation.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            allow_invalid_continuation: true,
            allow_overlong: true,
        }
    }
}
