//! Benchmarks for grid transforms
//!
//! Measures the pure transform functions on a full-size grid and the cost of
//! a committed edit including the history snapshot.

use criterion::{criterion_group, criterion_main, Criterion};
use pixy_engine_edit::{
    transform::{center_content, flip_horizontal, flip_vertical, rotate90},
    Color, GridEditor, PixelBuffer, MAX_GRID_SIZE,
};
use std::hint::black_box;

fn checker_board() -> PixelBuffer {
    let mut buffer = PixelBuffer::new(MAX_GRID_SIZE, MAX_GRID_SIZE, Color::GRAY).unwrap();
    for row in 4..24 {
        for column in 6..20 {
            if (row + column) % 2 == 0 {
                buffer.set(row, column, Color::BLACK).unwrap();
            }
        }
    }
    buffer
}

fn bench_transforms(c: &mut Criterion) {
    let buffer = checker_board();

    let mut group = c.benchmark_group("transforms");

    group.bench_function("flip_vertical", |b| b.iter(|| black_box(flip_vertical(black_box(&buffer)))));
    group.bench_function("flip_horizontal", |b| b.iter(|| black_box(flip_horizontal(black_box(&buffer)))));
    group.bench_function("rotate90", |b| b.iter(|| black_box(rotate90(black_box(&buffer)))));
    group.bench_function("center_content", |b| b.iter(|| black_box(center_content(black_box(&buffer), Color::GRAY))));

    group.finish();
}

fn bench_paint_commit(c: &mut Criterion) {
    c.bench_function("paint_cell_with_snapshot", |b| {
        let mut editor = GridEditor::new();
        editor.set_dimensions(MAX_GRID_SIZE, MAX_GRID_SIZE).unwrap();
        b.iter(|| {
            editor.paint_cell(black_box(7), black_box(9)).unwrap();
        })
    });
}

criterion_group!(benches, bench_transforms, bench_paint_commit);
criterion_main!(benches);
