use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn sample_resume(jobs: usize) -> String {
    let mut text = String::from("Name: Jane Doe\nEmail: jane@example.com\n\nEducation\n");
    text.push_str("BS Computer Science, MIT, 2014\n\nExperience\n");
    for i in 0..jobs {
        text.push_str(&format!(
            "Senior Engineer {}, Acme Corp\n- Built the billing pipeline\n- Led a team of {}\n\n",
            i, i
        ));
    }
    text.push_str("Skills\nRust, Go, SQL\nDistributed systems\n");
    text
}

fn classify_benchmark(c: &mut Criterion) {
    let small = sample_resume(3);
    let large = sample_resume(500);

    let mut group = c.benchmark_group("classify");

    group.throughput(Throughput::Bytes(small.len() as u64));
    group.bench_function("typical_resume", |b| {
        b.iter(|| resume_parser::classify(black_box(&small)))
    });

    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("long_resume", |b| {
        b.iter(|| resume_parser::classify(black_box(&large)))
    });

    group.finish();
}

criterion_group!(benches, classify_benchmark);
criterion_main!(benches);
