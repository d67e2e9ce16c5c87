//! Criterion benchmarks for cell planning and the scale arithmetic.
//!
//! Run with:
//! ```bash
//! cargo bench --package checker-core --bench layout_bench
//! ```

use checker_core::{
    container_width, fit_frame, plan_cells, CheckerConfig, DeviceCatalog, DeviceProfile,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Creates `n` devices, every third one rotatable.
fn build_devices(n: usize) -> Vec<DeviceProfile> {
    (0..n)
        .map(|i| {
            let profile = DeviceProfile::new(format!("device-{i}"), 320 + i as u32, 568 + i as u32);
            if i % 3 == 0 {
                profile.with_rotation()
            } else {
                profile
            }
        })
        .collect()
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_resolve_full_catalog(c: &mut Criterion) {
    let catalog = DeviceCatalog::builtin();
    let cfg = CheckerConfig::new(["https://example.com/"]);

    c.bench_function("resolve/full_catalog", |b| {
        b.iter(|| cfg.resolve(black_box(&catalog)))
    });
}

fn bench_plan_cells(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_cells");

    for n in [8usize, 64, 512] {
        let devices = build_devices(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &devices, |b, devices| {
            b.iter(|| plan_cells(black_box(devices)))
        });
    }

    group.finish();
}

fn bench_fit_and_sum(c: &mut Criterion) {
    let cells = plan_cells(&build_devices(64));

    c.bench_function("fit_frame_then_container_width/64", |b| {
        b.iter(|| {
            let widths = cells.iter().map(|cell| {
                let (w, h) = (f64::from(cell.width), f64::from(cell.height));
                fit_frame(w, h, black_box(600.0)).map_or(w, |fit| fit.wrapper_width) + 30.0
            });
            container_width(widths)
        })
    });
}

criterion_group!(benches, bench_resolve_full_catalog, bench_plan_cells, bench_fit_and_sum);
criterion_main!(benches);
