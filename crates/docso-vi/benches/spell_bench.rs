// Criterion benchmarks for docso-vi.
//
// Run:
//   cargo bench -p docso-vi

use criterion::{Criterion, criterion_group, criterion_main};

use docso_vi::number::Speller;
use docso_vi::phone::{PhoneConfig, PhoneValidator};

/// Spell every number below ten thousand.
fn bench_spell_below_10000(c: &mut Criterion) {
    let speller = Speller::default();
    c.bench_function("spell_0_to_9999", |b| {
        b.iter(|| {
            for n in 0..10_000u64 {
                std::hint::black_box(speller.spell(n));
            }
        });
    });
}

/// Spell a handful of large values with several tiers and fillers.
fn bench_spell_large(c: &mut Criterion) {
    let speller = Speller::default();
    let values = [
        1_000_000_001u64,
        1_234_567_890,
        9_999_999_999_999,
        2_000_450_000,
        u64::MAX,
    ];
    c.bench_function("spell_large", |b| {
        b.iter(|| {
            for &n in &values {
                std::hint::black_box(speller.spell(n));
            }
        });
    });
}

/// Validate phone numbers against the default carrier table.
fn bench_phone_validate(c: &mut Criterion) {
    let validator = PhoneValidator::new(PhoneConfig::default()).expect("default phone config");
    let numbers = ["0909111111", "0959111111", "0909 111 111", "0329123456", "0909111"];
    c.bench_function("phone_validate", |b| {
        b.iter(|| {
            for n in &numbers {
                std::hint::black_box(validator.validate(n));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_spell_below_10000,
    bench_spell_large,
    bench_phone_validate
);
criterion_main!(benches);
