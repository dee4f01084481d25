//! Benchmarks for ticking and laying out a panel row.
//!
//! Run with: cargo bench -p bento-widgets --bench surface_bench
//!
//! Each iteration replays one hover sweep across the row (enter every
//! panel in turn, then leave) at 60 fps, which keeps every weight tween
//! and reveal timeline in flight for the whole run.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use bento_core::geometry::Rect;
use bento_widgets::{InteractionSurface, SurfaceConfig};

const FRAME: Duration = Duration::from_millis(16);
const FRAMES_PER_PANEL: usize = 12;
const AREA: Rect = Rect::new(0, 0, 160, 40);

fn sweep(surface: &mut InteractionSurface) -> usize {
    let mut visible = 0;
    for rank in 0..surface.len() {
        surface.pointer_enter(rank);
        for _ in 0..FRAMES_PER_PANEL {
            surface.tick(FRAME);
            let frame = surface.layout(AREA);
            visible += frame.panels.iter().filter(|p| p.content.visible).count();
        }
    }
    surface.pointer_leave_row();
    visible
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface/hover_sweep");

    group.bench_function("works_cascade", |b| {
        let config = SurfaceConfig::works();
        b.iter(|| {
            let mut surface = config.build();
            black_box(sweep(&mut surface))
        });
    });

    group.bench_function("services_image_fade", |b| {
        let config = SurfaceConfig::services();
        b.iter(|| {
            let mut surface = config.build();
            black_box(sweep(&mut surface))
        });
    });

    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface/layout");

    group.bench_function("mid_transition", |b| {
        let mut surface = SurfaceConfig::works().build();
        surface.pointer_enter(1);
        surface.tick(Duration::from_millis(300));
        b.iter(|| black_box(surface.layout(black_box(AREA))));
    });

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_layout);
criterion_main!(benches);
