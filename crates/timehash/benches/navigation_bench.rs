use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use timehash::{after, before, encode, shift, DEFAULT_PRECISION, DOMAIN_END};

const SAMPLE_SIZE: usize = 256;

fn generate_hashes(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42_101_337);
    (0..count)
        .filter_map(|_| encode(rng.gen_range(1.0..DOMAIN_END - 1.0), DEFAULT_PRECISION).ok())
        .collect()
}

fn benchmark_navigation(c: &mut Criterion) {
    let hashes = generate_hashes(SAMPLE_SIZE);

    let mut group = c.benchmark_group("timehash_navigation");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function("after_batch_256", |b| {
        b.iter(|| {
            for hash in &hashes {
                let _ = black_box(after(hash));
            }
        });
    });

    group.bench_function("before_batch_256", |b| {
        b.iter(|| {
            for hash in &hashes {
                let _ = black_box(before(hash));
            }
        });
    });

    group.bench_function("shift_1000_batch_256", |b| {
        b.iter(|| {
            for hash in &hashes {
                let _ = black_box(shift(hash, 1_000));
            }
        });
    });

    group.finish();
}

criterion_group!(navigation_benches, benchmark_navigation);
criterion_main!(navigation_benches);
