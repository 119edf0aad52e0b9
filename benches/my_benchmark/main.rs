// Available modules
mod assets;
mod frequency_table;
mod group_comparison;

// Used Modules
use criterion::{criterion_group, criterion_main, Criterion};
use frequency_table::*;
use group_comparison::*;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    bench_build_frequency_table(c);
    bench_all_modes(c);
    bench_compare_groups(c);
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
