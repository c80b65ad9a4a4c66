use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use readsets::builder::Resolver;
use readsets::config::Designators;
use readsets::filename::FileSpec;
use readsets::naming::classify;

fn designator_files(samples: usize) -> Vec<String> {
    (0..samples)
        .flat_map(|i| {
            [
                format!("runs/2024/sample{i}_1.fastq.gz"),
                format!("runs/2024/sample{i}_2.fastq.gz"),
            ]
        })
        .collect()
}

fn illumina_files(samples: usize) -> Vec<String> {
    (0..samples)
        .flat_map(|i| {
            [
                format!("runs/2024/sample{i}_S{i}_L001_R1_001.fastq.gz"),
                format!("runs/2024/sample{i}_S{i}_L001_R2_001.fastq.gz"),
            ]
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("FileSpec::parse", |b| {
        b.iter(|| FileSpec::parse(black_box("runs/2024/sample7_S7_L001_R1_001.fastq.gz")))
    });
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let designators = Designators::default();

    for stem in ["sample7_1", "sample7_S7_L001_R1_001", "my_Sample_S7_L001_R2_001", "unknown"] {
        group.bench_with_input(BenchmarkId::from_parameter(stem), stem, |b, stem| {
            b.iter(|| classify(black_box(stem), &designators))
        });
    }

    group.finish();
}

fn bench_resolve_paired(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_paired");
    let resolver = Resolver::new();

    for samples in [10, 100, 1000] {
        let files = designator_files(samples);
        group.bench_with_input(BenchmarkId::new("designator", samples), &files, |b, files| {
            b.iter(|| resolver.resolve_paired(black_box(files)))
        });

        let files = illumina_files(samples);
        group.bench_with_input(BenchmarkId::new("illumina", samples), &files, |b, files| {
            b.iter(|| resolver.resolve_paired(black_box(files)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_classify, bench_resolve_paired);
criterion_main!(benches);
