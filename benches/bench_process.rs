use criterion::{Criterion, criterion_group, criterion_main};
use myapp_lib::foolib::default_processors;
use myapp_lib::process_args;

fn bench_single_argument(c: &mut Criterion) {
    let argv = ["myapp", "hello"];
    c.bench_function("process_single_argument", |b| {
        b.iter(|| {
            let _ = process_args(&argv, &mut std::io::sink(), &mut default_processors());
        })
    });
}

fn bench_many_arguments(c: &mut Criterion) {
    let argv: Vec<String> = (0..256).map(|i| format!("argument-{}", i)).collect();
    c.bench_function("process_256_arguments", |b| {
        b.iter(|| {
            let _ = process_args(&argv, &mut std::io::sink(), &mut default_processors());
        })
    });
}

criterion_group!(benches, bench_single_argument, bench_many_arguments);
criterion_main!(benches);
