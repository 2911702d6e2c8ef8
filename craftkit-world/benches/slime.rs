use std::hint::black_box;

use craftkit_world::{
    coordinates::ChunkPos,
    seed::Seed,
    slime::{is_slime_chunk, slime_chunks_around},
};
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_slime_chunks(c: &mut Criterion) {
    let seed = Seed(-4172144997902289642);

    c.bench_function("slime chunk predicate", |b| {
        b.iter(|| is_slime_chunk(black_box(-312), black_box(1024), seed));
    });

    c.bench_function("slime chunk scan radius 64", |b| {
        b.iter(|| slime_chunks_around(black_box(ChunkPos::new(0, 0)), 64, seed));
    });
}

criterion_group!(benches, bench_slime_chunks);
criterion_main!(benches);
