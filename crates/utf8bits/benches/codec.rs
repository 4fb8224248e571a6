//! Benchmark – `utf8bits::decode` and `utf8bits::encode`
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Produce a deterministic text of exactly `target_len` bytes that cycles
/// through characters of every encoded width.
fn make_payload(target_len: usize, alphabet: &[char]) -> String {
    let mut s = String::with_capacity(target_len);
    for ch in alphabet.iter().cycle() {
        if s.len() + ch.len_utf8() > target_len {
            break;
        }
        s.push(*ch);
    }
    // Pad with ASCII so every payload has the same byte length.
    s.extend(std::iter::repeat_n('a', target_len - s.len()));
    debug_assert_eq!(s.len(), target_len);
    s
}

fn payloads() -> [(&'static str, String); 3] {
    const LEN: usize = 64 * 1024;
    [
        ("ascii", make_payload(LEN, &['a', 'b', 'c'])),
        ("mixed", make_payload(LEN, &['a', 'é', '€', '😀'])),
        ("cjk", make_payload(LEN, &['東', '京', '都'])),
    ]
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, payload) in payloads() {
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("utf8bits", name), &payload, |b, p| {
            b.iter(|| utf8bits::decode(black_box(p.as_bytes())).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("core", name), &payload, |b, p| {
            b.iter(|| core::str::from_utf8(black_box(p.as_bytes())).unwrap().to_owned());
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (name, payload) in payloads() {
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("utf8bits", name), &payload, |b, p| {
            b.iter(|| utf8bits::encode(black_box(p)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode);
criterion_main!(benches);
