//! Event channel throughput.
//!
//! Run with: cargo bench -p quill_input

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quill_input::{Event, EventChannel, Position};

fn bench_publish_then_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_then_drain");

    for count in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (publisher, stream) = EventChannel::new(64).expect("forwarder");
            b.iter(|| {
                for i in 0..count {
                    publisher.publish(Event::PointerMove(Position::new(i as i32, 0)));
                }
                let mut received = 0;
                while received < count {
                    received += stream.drain().len();
                }
                black_box(received)
            });
        });
    }

    group.finish();
}

fn bench_empty_drain(c: &mut Criterion) {
    let (_publisher, stream) = EventChannel::new(64).expect("forwarder");
    c.bench_function("empty_drain", |b| b.iter(|| black_box(stream.drain())));
}

criterion_group!(benches, bench_publish_then_drain, bench_empty_drain);
criterion_main!(benches);
