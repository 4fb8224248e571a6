use rstest::rstest;

use crate::{Width, encode, encode_char};

#[rstest]
#[case::nul('\u{0}', &[0x00])]
#[case::ascii_max('\u{7F}', &[0x7F])]
#[case::two_min('\u{80}', &[0xC2, 0x80])]
#[case::two_max('\u{7FF}', &[0xDF, 0xBF])]
#[case::three_min('\u{800}', &[0xE0, 0xA0, 0x80])]
#[case::three_max('\u{FFFF}', &[0xEF, 0xBF, 0xBF])]
#[case::four_min('\u{10000}', &[0xF0, 0x90, 0x80, 0x80])]
#[case::four_max('\u{10FFFF}', &[0xF4, 0x8F, 0xBF, 0xBF])]
fn encodes_width_boundaries(#[case] ch: char, #[case] expected: &[u8]) {
    assert_eq!(&*encode_char(ch), expected);
    assert_eq!(encode_char(ch).width(), Width::of_code_point(u32::from(ch)));
}

#[test]
fn encodes_reference_characters() {
    assert_eq!(encode("A"), [0x41]);
    assert_eq!(encode("é"), [0xC3, 0xA9]);
    assert_eq!(encode("€"), [0xE2, 0x82, 0xAC]);
    assert_eq!(encode("\u{1F600}"), [0xF0, 0x9F, 0x98, 0x80]);
}

#[test]
fn empty_text_is_empty_bytes() {
    assert!(encode("").is_empty());
}

#[test]
fn leading_byte_comes_first() {
    assert_eq!(encode("a€b"), b"a\xE2\x82\xACb");
}
