use criterion::{criterion_group, criterion_main};

mod urc;

criterion_group!(benches, urc::bench_classify_raw, urc::bench_classify_typed);
criterion_main!(benches);
