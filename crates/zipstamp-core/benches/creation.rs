//! Benchmarks for archive creation performance.
//!
//! Measures file collection, filter matching, and end-to-end archive creation
//! across compression levels and directory shapes.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::uninlined_format_args,
    clippy::items_after_statements
)]

use chrono::Local;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use zipstamp_core::FilterSpec;
use zipstamp_core::NoopProgress;
use zipstamp_core::collect;
use zipstamp_core::create_archive_at;
use zipstamp_core::creation::ArchiveRequest;
use zipstamp_core::should_include;

/// Creates a flat directory with `file_count` files of 1 KB each.
fn create_test_directory(temp: &TempDir, file_count: usize) -> PathBuf {
    let dir = temp.path().join("bench_data");
    fs::create_dir_all(&dir).unwrap();

    let content = "x".repeat(1024);
    for i in 0..file_count {
        let ext = if i % 4 == 0 { "log" } else { "txt" };
        fs::write(dir.join(format!("file_{:05}.{}", i, ext)), &content).unwrap();
    }

    dir
}

/// Creates a tree with the given depth and files per level.
fn create_nested_directory(temp: &TempDir, depth: usize, files_per_level: usize) -> PathBuf {
    let root = temp.path().join("nested");
    fs::create_dir_all(&root).unwrap();

    fn create_level(base: &Path, current_depth: usize, max_depth: usize, files: usize) {
        if current_depth >= max_depth {
            return;
        }
        for i in 0..files {
            fs::write(base.join(format!("file_{}.txt", i)), "data").unwrap();
        }
        let sub = base.join(format!("level_{}", current_depth));
        fs::create_dir_all(&sub).unwrap();
        create_level(&sub, current_depth + 1, max_depth, files);
    }

    create_level(&root, 0, depth, files_per_level);
    root
}

fn benchmark_compression_levels(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let source = create_test_directory(&temp, 100);
    let dest = temp.path().join("out");
    fs::create_dir_all(&dest).unwrap();

    let mut group = c.benchmark_group("create_compression_level");
    group.throughput(Throughput::Bytes(100 * 1024));

    for level in [1u8, 6, 9] {
        let request = ArchiveRequest::new(&source)
            .with_destination(&dest)
            .with_compression_level(level)
            .with_keep(1);
        group.bench_with_input(BenchmarkId::from_parameter(level), &request, |b, request| {
            b.iter(|| {
                create_archive_at(black_box(request), Local::now(), &mut NoopProgress).unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_file_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_file_count");

    for count in [10usize, 100, 500] {
        let temp = TempDir::new().unwrap();
        let source = create_test_directory(&temp, count);
        let dest = temp.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        let request = ArchiveRequest::new(&source)
            .with_destination(&dest)
            .with_inventory(true)
            .with_keep(1);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &request, |b, request| {
            b.iter(|| {
                create_archive_at(black_box(request), Local::now(), &mut NoopProgress).unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_collect(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let root = create_nested_directory(&temp, 8, 20);
    let unfiltered = FilterSpec::default();
    let filtered = FilterSpec::default()
        .with_include(vec!["*.txt".to_string()])
        .with_exclude(vec!["file_1*".to_string()]);

    let mut group = c.benchmark_group("collect");
    group.bench_function("unfiltered", |b| {
        b.iter(|| collect(black_box(&root), &unfiltered).unwrap());
    });
    group.bench_function("filtered", |b| {
        b.iter(|| collect(black_box(&root), &filtered).unwrap());
    });
    group.finish();
}

fn benchmark_should_include(c: &mut Criterion) {
    let include = vec!["*.txt".to_string(), "*.csv".to_string(), "report_*".to_string()];
    let exclude = vec!["secret*".to_string(), "*.tmp".to_string()];
    let names = [
        "notes.txt",
        "secret_plan.txt",
        "data.csv",
        "cache.tmp",
        "report_2024.pdf",
        "image.png",
    ];

    c.bench_function("should_include", |b| {
        b.iter(|| {
            for name in &names {
                black_box(should_include(black_box(name), &include, &exclude));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_compression_levels,
    benchmark_file_counts,
    benchmark_collect,
    benchmark_should_include
);
criterion_main!(benches);
