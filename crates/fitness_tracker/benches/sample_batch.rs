use criterion::{Criterion, criterion_group, criterion_main};
use fitness_tracker::{Workout, read_package};
use std::hint::black_box;

fn bench_sample_batch(c: &mut Criterion) {
    let batch: [(&str, Vec<f64>); 3] = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    c.bench_function("evaluate_sample_batch", |b| {
        b.iter(|| {
            for (code, data) in &batch {
                let record = read_package(code, data).expect("record");
                black_box(record.summary().to_string());
            }
        })
    });
}

criterion_group!(benches, bench_sample_batch);
criterion_main!(benches);
