use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use unidecode_charset::Unidecode;

/// Ideographs spread over every CJK block, so a cold engine loads ~80 tables.
fn cjk_spread() -> String {
    (0x4e00u32..=0x9fa5)
        .step_by(97)
        .filter_map(char::from_u32)
        .collect()
}

/// Mostly ASCII with sparse Latin-2 letters; stays within blocks 0x00-0x01.
fn czech_prose() -> String {
    "Příliš žluťoučký kůň úpěl ďábelské ódy, a pak šel domů. ".repeat(64)
}

/// Pure ASCII input, the fast path.
fn ascii_prose() -> String {
    "The quick brown fox jumps over the lazy dog. ".repeat(64)
}

fn bench_decode(c: &mut Criterion) {
    let ascii = Unidecode::to_ascii();
    let latin2 = Unidecode::to_latin2();
    let cjk = cjk_spread();
    let czech = czech_prose();
    let plain = ascii_prose();

    // Warm caches before measuring steady-state lookups.
    ascii.decode(cjk.as_str());
    latin2.decode(czech.as_str());

    c.bench_function("ascii_fast_path", |b| {
        b.iter(|| ascii.decode(black_box(plain.as_str())))
    });
    c.bench_function("cjk_warm", |b| b.iter(|| ascii.decode(black_box(cjk.as_str()))));
    c.bench_function("cjk_initials_warm", |b| {
        b.iter(|| ascii.to_initials(black_box(cjk.as_str())))
    });
    c.bench_function("czech_latin2_warm", |b| {
        b.iter(|| latin2.decode(black_box(czech.as_str())))
    });
    c.bench_function("czech_ascii_warm", |b| {
        b.iter(|| ascii.decode(black_box(czech.as_str())))
    });

    // Every iteration starts from an empty cache and pays for block loading.
    c.bench_function("cjk_cold", |b| {
        b.iter_batched(
            Unidecode::to_ascii,
            |engine| engine.decode(black_box(cjk.as_str())),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(name=decode_benches; config=Criterion::default().sample_size(30); targets=bench_decode);
criterion_main!(decode_benches);
