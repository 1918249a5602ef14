//! Report Rendering Benchmarks
//!
//! **Purpose:** Measure table construction and comment rendering for large
//! compile matrices
//!
//! **Regression Threshold:** >20% slower than baseline
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench report_rendering
//! ```
//!
//! **What's Being Measured:**
//! 1. `build tables` - Summary and detailed table construction with column discovery
//! 2. `render comment` - Markdown and CSV rendering under the length ceiling
//!
//! **Performance Notes:**
//! - Column lookup is a HashMap hit per size entry
//! - The largest matrix overflows the ceiling, so sections get dropped

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use size_deltas::report::{ReportRenderer, SketchesReport, TableBuilder};
use std::hint::black_box;

fn board_report(board: usize, sketches: usize) -> SketchesReport {
    let sketches: Vec<_> = (0..sketches)
        .map(|sketch| {
            json!({
                "name": format!("examples/Sketch{}", sketch),
                "compilation_success": true,
                "sizes": [
                    {"name": "flash", "maximum": 32256,
                     "delta": {"absolute": -(sketch as i64), "relative": -0.01}},
                    {"name": "RAM for global variables", "maximum": 2048,
                     "delta": {"absolute": sketch as i64 % 7, "relative": 0.34}}
                ]
            })
        })
        .collect();

    serde_json::from_value(json!({
        "commit_hash": "d8fd302",
        "commit_url": "https://example.com/d8fd302",
        "boards": [{
            "board": format!("vendor:arch:board{}", board),
            "sizes": [
                {"name": "flash", "maximum": 32256, "delta": {
                    "absolute": {"minimum": -12, "maximum": 4},
                    "relative": {"minimum": -0.05, "maximum": 0.01}}},
                {"name": "RAM for global variables", "maximum": 2048, "delta": {
                    "absolute": {"minimum": 0, "maximum": 6},
                    "relative": {"minimum": 0.0, "maximum": 0.29}}}
            ],
            "sketches": sketches
        }]
    }))
    .unwrap()
}

fn reports(boards: usize, sketches: usize) -> Vec<SketchesReport> {
    (0..boards).map(|board| board_report(board, sketches)).collect()
}

fn bench_build_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("build tables");
    for (boards, sketches) in [(10, 10), (50, 100), (100, 400)] {
        let input = reports(boards, sketches);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", boards, sketches)),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(TableBuilder::summary(input));
                    black_box(TableBuilder::detailed(input));
                })
            },
        );
    }
    group.finish();
}

fn bench_render_comment(c: &mut Criterion) {
    let mut group = c.benchmark_group("render comment");
    for (boards, sketches) in [(10, 10), (100, 400)] {
        let input = reports(boards, sketches);
        let summary = TableBuilder::summary(&input);
        let detailed = TableBuilder::detailed(&input);
        let renderer = ReportRenderer::new();
        group.bench_function(format!("{}x{}", boards, sketches), |b| {
            b.iter(|| black_box(renderer.render(&summary, &detailed, "d8fd302")).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_tables, bench_render_comment);
criterion_main!(benches);
