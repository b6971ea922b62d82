//! Criterion benchmarks for the extraction and validation stages.
//!
//! All inputs come from seeded [`NoiseImage`]s so runs are reproducible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use photo_entropy::{
    BitString, Combiner, LsbExtractor, NoiseImage, Pipeline, RandomnessValidator,
    VonNeumannExtractor, WINDOW_BITS,
};

fn raw_bits(width: u32, height: u32, seed: u64) -> BitString {
    let image = NoiseImage::from_seed(width, height, seed).expect("bench dimensions are non-zero");
    LsbExtractor::default().extract(&image.as_buffer())
}

/// A bitstream spanning exactly `windows` test windows.
fn window_input(windows: usize, seed: u64) -> BitString {
    let height = (windows * WINDOW_BITS / 200) as u32;
    raw_bits(200, height, seed)
}

fn bench_lsb_extraction(c: &mut Criterion) {
    let extractor = LsbExtractor::default();
    let mut group = c.benchmark_group("lsb_extraction");

    for side in [128u32, 256, 512] {
        let image = NoiseImage::from_seed(side, side, 42).expect("side is non-zero");

        group.throughput(Throughput::Elements(u64::from(side) * u64::from(side)));
        group.bench_with_input(BenchmarkId::from_parameter(side), &image, |b, image| {
            b.iter(|| extractor.extract(black_box(&image.as_buffer())))
        });
    }

    group.finish();
}

fn bench_xor_combination(c: &mut Criterion) {
    let left = raw_bits(512, 512, 42);
    let right = raw_bits(512, 512, 123);
    let combiner = Combiner::new();

    c.bench_function("xor_combine_262144_bits", |b| {
        b.iter(|| combiner.combine(black_box(&left), black_box(&right)))
    });
}

fn bench_von_neumann(c: &mut Criterion) {
    let bits = raw_bits(512, 512, 42);
    let debiaser = VonNeumannExtractor::new();

    c.bench_function("von_neumann_262144_bits", |b| {
        b.iter(|| debiaser.extract(black_box(&bits)))
    });
}

fn bench_fips_battery(c: &mut Criterion) {
    let validator = RandomnessValidator::new();
    let mut group = c.benchmark_group("fips_battery");

    for windows in [1usize, 5, 10] {
        let bits = window_input(windows, 42);

        group.throughput(Throughput::Elements((windows * WINDOW_BITS) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(windows), &bits, |b, bits| {
            b.iter(|| validator.validate(black_box(bits)))
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let pipeline = Pipeline::default();
    let mut group = c.benchmark_group("full_pipeline");
    // A single run validates four streams.
    group.sample_size(20);

    for side in [128u32, 256, 512] {
        let image_a = NoiseImage::from_seed(side, side, 42).expect("side is non-zero");
        let image_b = NoiseImage::from_seed(side, side, 123).expect("side is non-zero");

        group.throughput(Throughput::Elements(u64::from(side) * u64::from(side)));
        group.bench_with_input(
            BenchmarkId::from_parameter(side),
            &(image_a, image_b),
            |b, (image_a, image_b)| {
                b.iter(|| {
                    pipeline.run(
                        black_box(&image_a.as_buffer()),
                        black_box(&image_b.as_buffer()),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lsb_extraction,
    bench_xor_combination,
    bench_von_neumann,
    bench_fips_battery,
    bench_full_pipeline
);
criterion_main!(benches);
