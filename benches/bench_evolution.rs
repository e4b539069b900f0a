use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mkpga::{
    breeding::{BreedStrategy, PairwiseBreedStrategy},
    chromosome::Chromosome,
    constraints::repair_and_complete,
    evolution::{run, EvolutionOptions, LogLevel},
    instance::ProblemInstance,
    rng::RandomNumberGenerator,
    seeding::{initialize_population, FeasibilityMode},
};
use rand::Rng;

fn instance(m: usize, n: usize) -> ProblemInstance {
    let mut rng = RandomNumberGenerator::from_seed(n as u64);
    let profit = (0..n).map(|_| rng.rng.gen_range(10..500u32) as f64).collect();
    let weights: Vec<Vec<u64>> = (0..m)
        .map(|_| (0..n).map(|_| rng.rng.gen_range(1..200)).collect())
        .collect();
    let capacity = weights
        .iter()
        .map(|row| (row.iter().sum::<u64>() / 4) as f64)
        .collect();
    ProblemInstance::new(profit, weights, capacity, None).unwrap()
}

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair_and_complete");
    for n in [50, 250, 1000] {
        let instance = instance(10, n);
        let full = Chromosome::from_genes(vec![true; n]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &full, |b, full| {
            b.iter(|| repair_and_complete(black_box(full.clone()), black_box(&instance)))
        });
    }
    group.finish();
}

fn bench_breeding(c: &mut Criterion) {
    let instance = instance(10, 250);
    let options = EvolutionOptions::default();
    let strategy = PairwiseBreedStrategy::new();
    let mut rng = RandomNumberGenerator::from_seed(1);
    let parents = initialize_population(&instance, 30, FeasibilityMode::Repaired, &mut rng);

    c.bench_function("pairwise_breeding_30", |b| {
        b.iter(|| {
            let result = strategy.breed(
                black_box(&parents),
                black_box(&instance),
                black_box(&options),
                black_box(&mut rng),
            );
            assert!(result.is_ok());
        })
    });
}

fn bench_run(c: &mut Criterion) {
    let instance = instance(5, 100);
    let options = EvolutionOptions::new(50, LogLevel::None, 30, 0.05);

    c.bench_function("run_50_generations", |b| {
        b.iter(|| {
            let mut rng = RandomNumberGenerator::from_seed(7);
            let population =
                initialize_population(&instance, 30, FeasibilityMode::Repaired, &mut rng);
            run(black_box(&instance), population, &options, &mut rng).unwrap()
        })
    });
}

criterion_group!(benches, bench_repair, bench_breeding, bench_run);
criterion_main!(benches);
