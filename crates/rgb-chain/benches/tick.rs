//! Tick throughput benchmarks using criterion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rgb_chain::prelude::*;

/// Build `count` independent chains of three events each, all running forever.
fn busy_controller(count: u64) -> Controller {
    let mut controller = Controller::with_capacity(count as usize * 4);
    for _ in 0..count {
        let root = controller.create();
        let first = controller.compound(root).unwrap();
        controller.on_update(first, |_, _, _| false).unwrap();
        let second = controller.extend(first).unwrap();
        controller
            .on_update(second, |_, _, args| args.accumulated() < 0.0)
            .unwrap();
        controller.start(root).unwrap();
    }
    controller.update(0.0);
    controller
}

fn update_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");

    for count in [1, 100, 1000, 10000] {
        group.throughput(Throughput::Elements(count));

        group.bench_with_input(BenchmarkId::new("compound", count), &count, |b, &count| {
            let mut controller = busy_controller(count);
            b.iter(|| {
                controller.update(black_box(1.0 / 60.0));
            });
        });
    }

    group.finish();
}

fn sequence_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");

    for length in [10, 100, 1000] {
        group.throughput(Throughput::Elements(length));

        group.bench_with_input(
            BenchmarkId::new("run_to_end", length),
            &length,
            |b, &length| {
                b.iter(|| {
                    let mut controller = Controller::new();
                    let root = controller.create();
                    let mut tail = controller.sequence(root).unwrap();
                    for _ in 1..length {
                        tail = controller.extend(tail).unwrap();
                    }
                    controller.start(root).unwrap();
                    while controller.is_running(root) {
                        controller.update(1.0 / 60.0);
                    }
                    black_box(controller.tick())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, update_benchmarks, sequence_benchmarks);
criterion_main!(benches);
