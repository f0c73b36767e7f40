//! Criterion benchmarks for blueprint flattening and rotation.
//!
//! Benchmarks:
//!   - get_tiles on a 64-item mixed layout
//!   - rotate on the same layout
//!
//! Run with: cargo bench -p placement --bench blueprint_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use placement::direction::{Axis, DiagDirection, Trackdir};
use placement::types::{BridgeType, StationId};
use placement::{Blueprint, BlueprintItem, MapSize, TileIndex, TileOffset};

fn build_layout() -> Blueprint {
    let mut bp = Blueprint::new();
    for i in 0..16 {
        let row = i * 3;
        bp.add(
            TileIndex(i as u32 * 4),
            BlueprintItem::rail_track(TileOffset::new(0, row), 12, Trackdir::XSw),
        );
        bp.add(
            TileIndex(i as u32 * 4 + 1),
            BlueprintItem::rail_station_part(
                TileOffset::new(14, row),
                Axis::X,
                StationId(i as u16),
                2,
                6,
            ),
        );
        bp.add(
            TileIndex(i as u32 * 4 + 2),
            BlueprintItem::rail_bridge(
                TileOffset::new(21, row),
                DiagDirection::SW,
                TileOffset::new(27, row),
                BridgeType(0),
            ),
        );
        bp.add(
            TileIndex(i as u32 * 4 + 3),
            BlueprintItem::rail_track(TileOffset::new(28, row + 1), 8, Trackdir::UpperE),
        );
    }
    bp
}

fn bench_get_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("blueprint_get_tiles");
    let map = MapSize::default();
    let bp = build_layout();
    let anchor = map.tile_xy(64, 64).unwrap();

    group.bench_function("mixed_64_items", |b| {
        b.iter(|| black_box(bp.get_tiles(black_box(anchor), &map)));
    });

    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("blueprint_rotate");
    let bp = build_layout();

    group.bench_function("mixed_64_items", |b| {
        b.iter(|| black_box(black_box(&bp).rotate()));
    });

    group.finish();
}

criterion_group!(benches, bench_get_tiles, bench_rotate);
criterion_main!(benches);
