use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use packdraw::{CatalogItem, PackDefinition, Rarity, RarityWeights};
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn gen_pack(n: usize) -> PackDefinition {
    // Round-robin items across the tiers so every pool is populated.
    let items = (0..n)
        .map(|i| CatalogItem {
            id: format!("item_{i}"),
            name: format!("Item {i}"),
            tier: Rarity::ALL[i % Rarity::ALL.len()],
            image: None,
        })
        .collect();
    PackDefinition {
        id: "bench_pack".into(),
        name: "Bench Pack".into(),
        description: String::new(),
        price: 0,
        weights: RarityWeights::new(70.0, 20.0, 8.0, 2.0),
        items,
    }
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_draw");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[4usize, 16, 64, 256, 1024] {
        let pack = gen_pack(n);
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

        group.bench_function(format!("draw_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(999),
                |rng| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= pack.draw(rng).unwrap().id.len();
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_simulate");
    const TRIALS: usize = 1024;

    for &n in &[4usize, 64, 1024] {
        let pack = gen_pack(n);
        group.throughput(Throughput::Elements(TRIALS as u64));

        group.bench_function(format!("simulate_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(1001),
                |rng| black_box(pack.simulate(TRIALS, rng).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(draw, bench_draw, bench_simulate);
criterion_main!(draw);
