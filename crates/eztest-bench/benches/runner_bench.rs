//! Runner benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use eztest_bench::populated_registry;
use eztest_core::{CaptureReporter, ConsoleReporter, Runner};

fn bench_run(c: &mut Criterion) {
    let sizes: &[usize] = &[10, 100, 1000];
    let mut group = c.benchmark_group("run");
    let runner = Runner::new("bench");

    for &size in sizes {
        let registry = populated_registry(size, 7);
        group.bench_with_input(BenchmarkId::new("capture", size), &registry, |b, reg| {
            b.iter(|| {
                let mut capture = CaptureReporter::new();
                criterion::black_box(runner.run_with(reg, &mut capture).failed)
            });
        });
        group.bench_with_input(BenchmarkId::new("console_sink", size), &registry, |b, reg| {
            b.iter(|| {
                let mut console = ConsoleReporter::new(std::io::sink());
                criterion::black_box(runner.run_with(reg, &mut console).failed)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run);
criterion_main!(benches);
