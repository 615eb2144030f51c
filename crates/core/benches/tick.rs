//! Criterion benchmarks for the synapse animation tick.
//!
//! Run with:
//!   cargo bench -p synaptica

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use synaptica::simulator::{RngSource, SynapseSimulator};
use synaptica::DrugId;

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for drug in DrugId::ALL {
        group.bench_function(drug.key(), |b| {
            let mut sim = SynapseSimulator::new(drug);
            let mut rng = RngSource(StdRng::seed_from_u64(42));
            sim.play();
            // Reach a steady population before measuring.
            for _ in 0..200 {
                sim.tick(&mut rng);
            }
            b.iter(|| black_box(sim.tick(&mut rng)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
