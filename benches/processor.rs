use ampsim::amp::processor::Processor;
use ampsim::params::{ParamId, ParameterStore};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SAMPLE_RATE: f64 = 48000.0;

fn bench_steady_vs_ramping(c: &mut Criterion) {
    let mut group = c.benchmark_group("Steady vs Ramping Gain");

    for &block_size in &[64usize, 128, 512] {
        group.bench_with_input(
            BenchmarkId::new("steady", block_size),
            &block_size,
            |b, &block_size| {
                let params = ParameterStore::new();
                params.set(ParamId::Input, 6.0);
                params.set(ParamId::Output, -6.0);

                let mut processor = Processor::default();
                processor.prepare_to_play(SAMPLE_RATE, block_size);
                let mut left = vec![0.5f32; block_size];
                let mut right = vec![0.5f32; block_size];

                b.iter(|| {
                    processor.process_block(
                        black_box(&mut [&mut left[..], &mut right[..]]),
                        &params,
                    );
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ramping", block_size),
            &block_size,
            |b, &block_size| {
                let params = ParameterStore::new();
                let mut processor = Processor::default();
                processor.prepare_to_play(SAMPLE_RATE, block_size);
                let mut left = vec![0.5f32; block_size];
                let mut right = vec![0.5f32; block_size];
                let mut flip = false;

                b.iter(|| {
                    // New target every block keeps both stages ramping.
                    flip = !flip;
                    params.set(ParamId::Input, if flip { 6.0 } else { -6.0 });
                    params.set(ParamId::Output, if flip { -3.0 } else { 3.0 });
                    processor.process_block(
                        black_box(&mut [&mut left[..], &mut right[..]]),
                        &params,
                    );
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_steady_vs_ramping);
criterion_main!(benches);
