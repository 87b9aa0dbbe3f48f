//! Benchmarks for unzipr-core extraction.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::io::Cursor;
use tempfile::TempDir;
use unzipr_core::DestDir;
use unzipr_core::ExtractConfig;
use unzipr_core::extraction::Extractor;
use unzipr_core::formats::EntryStream;
use unzipr_core::test_utils::ZipTestBuilder;

fn many_small_files_zip(file_count: usize) -> Vec<u8> {
    (0..file_count)
        .fold(ZipTestBuilder::new(), |builder, i| {
            builder.add_file(&format!("file{i:04}.txt"), format!("content{i}").as_bytes())
        })
        .build()
}

fn nested_dirs_zip(depth: usize, files_per_dir: usize) -> Vec<u8> {
    let mut builder = ZipTestBuilder::new();
    let mut prefix = String::new();
    for _ in 0..depth {
        for i in 0..files_per_dir {
            builder = builder.add_file(&format!("{prefix}file{i}.txt"), b"content");
        }
        prefix.push_str("subdir/");
    }
    builder.build()
}

fn extract_once(data: &[u8], config: &ExtractConfig) {
    let temp = TempDir::new().unwrap();
    let dest = DestDir::create(temp.path()).unwrap();
    let mut stream = EntryStream::new(Cursor::new(data)).unwrap();
    Extractor::new(config.clone())
        .extract_entries(&mut stream, &dest)
        .unwrap();
}

fn benchmark_many_small_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_small_files");

    for file_count in [100, 1000] {
        let zip_data = many_small_files_zip(file_count);
        group.throughput(Throughput::Elements(file_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &zip_data,
            |b, data| b.iter(|| extract_once(data, &ExtractConfig::default())),
        );
    }

    group.finish();
}

fn benchmark_buffer_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_size");

    let size_bytes = 10 * 1024 * 1024;
    let zip_data = ZipTestBuilder::new()
        .add_deflated_file("large.bin", &vec![0xAB_u8; size_bytes])
        .build();
    group.throughput(Throughput::Bytes(size_bytes as u64));

    for buffer_size in [4096, 64 * 1024] {
        let config = ExtractConfig::default().with_buffer_size(buffer_size);
        group.bench_with_input(
            BenchmarkId::from_parameter(buffer_size),
            &zip_data,
            |b, data| b.iter(|| extract_once(data, &config)),
        );
    }

    group.finish();
}

fn benchmark_nested_directories(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_directories");

    for depth in [5, 20] {
        let zip_data = nested_dirs_zip(depth, 2);
        group.throughput(Throughput::Elements(depth as u64 * 2));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &zip_data, |b, data| {
            b.iter(|| extract_once(data, &ExtractConfig::default()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_many_small_files,
    benchmark_buffer_sizes,
    benchmark_nested_directories
);
criterion_main!(benches);
