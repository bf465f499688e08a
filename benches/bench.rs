use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use fourierkit::{dft, fft_with_opts_and_plan, ComplexVector, Direction, Options, Planner};
use utilities::gen_real_signal;
use utilities::rustfft::num_complex::Complex;
use utilities::rustfft::FftPlanner;

const LENGTHS: &[usize] = &[6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];

const DFT_LENGTHS: &[usize] = &[64, 100, 256, 500, 1024];

fn benchmark_fft_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward fft");

    for n in LENGTHS.iter() {
        let len = 1 << n;
        group.throughput(Throughput::Elements(len as u64));

        let options = Options::guess_options(len);
        let planner = Planner::new(len, Direction::Forward).unwrap();

        group.bench_function(BenchmarkId::new("fourierkit fft", len), |b| {
            b.iter_batched(
                || ComplexVector::from_real(&gen_real_signal(len)),
                |signal| fft_with_opts_and_plan(&signal, &options, &planner).unwrap(),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("rustfft", len), |b| {
            let mut planner = FftPlanner::<f64>::new();
            let fft = planner.plan_fft_forward(len);
            b.iter_batched(
                || {
                    gen_real_signal(len)
                        .into_iter()
                        .map(|re| Complex::new(re, 0.0))
                        .collect::<Vec<_>>()
                },
                |mut buffer| fft.process(&mut buffer),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn benchmark_dft_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("Forward dft");

    for &len in DFT_LENGTHS.iter() {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("fourierkit dft", len), |b| {
            b.iter_batched(
                || ComplexVector::from_real(&gen_real_signal(len)),
                |signal| dft(&signal, Direction::Forward).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_fft_forward, benchmark_dft_forward);
criterion_main!(benches);
