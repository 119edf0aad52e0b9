use criterion::{black_box, Criterion};
use think_stats::histogram::frequency_table::FrequencyTable;

use crate::assets;

pub fn bench_build_frequency_table(c: &mut Criterion) {
    for &count in &[1000, assets::LIVE_BIRTHS, 100_000] {
        let lengths = assets::pregnancy_lengths(count);

        let id = &format!("build_frequency_table_{}", count);
        c.bench_function(id, |b| {
            b.iter(|| FrequencyTable::from(black_box(lengths.as_slice())))
        });
    }
}

pub fn bench_all_modes(c: &mut Criterion) {
    let lengths = assets::pregnancy_lengths(assets::LIVE_BIRTHS);
    let table = FrequencyTable::from(lengths.as_slice());

    c.bench_function("all_modes", |b| {
        b.iter(|| black_box(&table).all_modes().unwrap())
    });
}
