use benchplot_core::reduce;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn gen_points(n: usize) -> Vec<(u64, u64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n as u64 {
        // simple sawtooth so values are not constant
        v.push((i, 20 + (i % 37) * 3));
    }
    v
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("stride_reduce");
    for &n in &[50_000usize, 100_000usize] {
        let data = gen_points(n);
        for &cap in &[1_000usize, 2_000usize, 5_000usize] {
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n{n}_cap{cap}")),
                &cap,
                |b, &cap| {
                    b.iter_batched(
                        || data.clone(),
                        |d| {
                            let _ = black_box(reduce(&d, cap));
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_reduce);
criterion_main!(benches);
