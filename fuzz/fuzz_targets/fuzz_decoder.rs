#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use utf8bits::{DecodeErrorKind, Decoder, DecoderOptions};

const HEADER: usize = 2; // one byte per `Flags` field

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Characters sitting on either side of every width boundary.
static EDGE_CHARS: &[char] = &[
    '\u{0}', '\u{7F}', '\u{80}', '\u{7FF}', '\u{800}', '\u{D7FF}', '\u{E000}', '\u{FFFF}',
    '\u{10000}', '\u{10FFFF}',
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[..HEADER].copy_from_slice(&with_rng(|rng| rng.random::<[u8; HEADER]>()));
        let mut len = HEADER;
        while len + 4 <= max_size && with_rng(|rng| rng.random_ratio(15, 16)) {
            len += append_char(&mut data[len..]);
        }
        if len > HEADER {
            corrupt(&mut data[HEADER..len]);
        }
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append one valid character, favoring width boundaries. Returns bytes
/// written; `buf` must hold at least four bytes.
fn append_char(buf: &mut [u8]) -> usize {
    let ch = with_rng(|rng| {
        if rng.random_bool(0.5) {
            EDGE_CHARS[rng.random_range(0..EDGE_CHARS.len())]
        } else {
            rng.random::<char>()
        }
    });
    ch.encode_utf8(buf).len()
}

/// Overwrite one byte, or flip bit 6 so a continuation byte turns into a
/// leading byte (and back). Leaves the input valid one time in three.
fn corrupt(buf: &mut [u8]) {
    with_rng(|rng| {
        let at = rng.random_range(0..buf.len());
        match rng.random_range(0..3) {
            0 => buf[at] = rng.random(),
            1 => buf[at] ^= 0b0100_0000,
            _ => {}
        }
    });
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Flags {
    allow_invalid_continuation: bool,
    allow_overlong: bool,
}

fn decoder(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(flags) = Flags::arbitrary(&mut u) else {
        return;
    };
    let bytes = u.take_rest();
    let options = DecoderOptions {
        allow_invalid_continuation: flags.allow_invalid_continuation,
        allow_overlong: flags.allow_overlong,
    };

    let mut strict = Decoder::new(bytes);
    let strict_text: Result<String, _> = strict.by_ref().collect();
    match (core::str::from_utf8(bytes), &strict_text) {
        (Ok(expected), Ok(text)) => {
            assert_eq!(expected, text);
            assert_eq!(utf8bits::encode(text), bytes);
        }
        (Err(err), Err(_)) => assert_eq!(err.valid_up_to(), strict.offset()),
        (expected, actual) => panic!("core: {expected:?}, utf8bits: {actual:?}"),
    }

    match utf8bits::decode_with(bytes, options) {
        Ok(text) => {
            if strict_text.is_ok() {
                assert_eq!(Ok(&text), strict_text.as_ref());
            }
        }
        Err(err) => {
            assert!(strict_text.is_err(), "relaxed options rejected valid input");
            if options.allow_overlong {
                assert!(!matches!(err.kind(), DecodeErrorKind::OverlongEncoding { .. }));
            }
            if options.allow_invalid_continuation {
                assert!(!matches!(err.kind(), DecodeErrorKind::InvalidContinuationByte(_)));
            }
        }
    }
}

fuzz_target!(|data: &[u8]| decoder(data));
