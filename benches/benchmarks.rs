//! Performance benchmarks for twig

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use termcolor::NoColor;
use twig::test_utils::TestTree;
use twig::{RenderConfig, TreeRenderer, read_entries};

fn create_flat_tree(file_count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..file_count {
        tree.add_file(&format!("file_{}.txt", i), "benchmark content\n");
    }
    tree
}

fn create_nested_tree(dir_count: usize, files_per_dir: usize) -> TestTree {
    let tree = TestTree::new();
    for d in 0..dir_count {
        for f in 0..files_per_dir {
            tree.add_file(&format!("dir_{}/file_{}.txt", d, f), "benchmark content\n");
        }
    }
    tree
}

fn bench_read_entries(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_entries");

    let small = create_flat_tree(10);
    group.bench_function("small_dir_10_files", |b| {
        b.iter(|| read_entries(black_box(small.path()), true))
    });

    let medium = create_flat_tree(100);
    group.bench_function("medium_dir_100_files", |b| {
        b.iter(|| read_entries(black_box(medium.path()), true))
    });

    let large = create_flat_tree(500);
    group.bench_function("large_dir_500_files", |b| {
        b.iter(|| read_entries(black_box(large.path()), true))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let renderer = TreeRenderer::new(RenderConfig {
        include_files: true,
        use_color: false,
    });

    let flat = create_flat_tree(100);
    group.bench_function("flat_100_files", |b| {
        b.iter(|| {
            let mut sink = NoColor::new(Vec::new());
            renderer.render(black_box(flat.path()), &mut sink).unwrap();
            sink.into_inner()
        })
    });

    let nested = create_nested_tree(20, 10);
    group.bench_function("nested_20_dirs_10_files", |b| {
        b.iter(|| {
            let mut sink = NoColor::new(Vec::new());
            renderer
                .render(black_box(nested.path()), &mut sink)
                .unwrap();
            sink.into_inner()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_read_entries, bench_render);
criterion_main!(benches);
