use criterion::{black_box, Criterion};
use think_stats::comparison::group_comparator::compare;

use crate::assets;

pub fn bench_compare_groups(c: &mut Criterion) {
    // Roughly the first born / other split of live births.
    let firsts = assets::birth_weights(4413, 1);
    let others = assets::birth_weights(4735, 2);

    c.bench_function("compare_groups", |b| {
        b.iter(|| compare(black_box(&firsts), black_box(&others)).unwrap())
    });
}
