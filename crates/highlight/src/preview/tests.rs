//! Plugin-level tests for the active preview and clipboard.

use std::sync::Arc;

use placement::config::PALETTE_TINT_RED;
use placement::direction::{Axis, DiagDirection, Trackdir};
use placement::types::StationId;
use placement::{Blueprint, BlueprintItem, TileIndex, TileOffset};

use crate::object_highlight::{HighlightType, ObjectHighlight};
use crate::test_harness::TestPreview;

fn sample_blueprint() -> Blueprint {
    let mut bp = Blueprint::new();
    bp.add(
        TileIndex(0),
        BlueprintItem::rail_track(TileOffset::new(0, 0), 3, Trackdir::XSw),
    );
    bp.add(
        TileIndex(1),
        BlueprintItem::rail_station_part(TileOffset::new(0, 1), Axis::X, StationId(1), 2, 3),
    );
    bp
}

#[test]
fn test_set_preview_builds_cache() {
    let mut preview = TestPreview::new();
    preview
        .set_preview(ObjectHighlight::make_rail_depot(TileIndex(100), DiagDirection::NE))
        .tick();

    assert_eq!(preview.active().highlight_type(), HighlightType::RailDepot);
    assert!(!preview.active().is_stale());
    let tiles = preview.active().cached_tiles().unwrap();
    assert_eq!(tiles.len(), 2);

    let dirty = preview.take_dirty_tiles();
    assert!(dirty.contains(&TileIndex(99)));
    assert!(dirty.contains(&TileIndex(100)));
}

#[test]
fn test_identical_request_is_skipped() {
    let mut preview = TestPreview::new();
    let depot = ObjectHighlight::make_rail_depot(TileIndex(100), DiagDirection::NE);
    preview.set_preview(depot.clone()).tick();
    preview.take_dirty_tiles();

    preview.set_preview(depot).tick();
    assert!(preview.take_dirty_tiles().is_empty());
    assert!(!preview.active().is_stale());
}

#[test]
fn test_last_request_of_frame_wins() {
    let mut preview = TestPreview::new();
    preview
        .set_preview(ObjectHighlight::make_rail_depot(TileIndex(100), DiagDirection::NE))
        .set_preview(ObjectHighlight::make_rail_station(
            TileIndex(10),
            TileIndex(12),
            Axis::X,
        ))
        .tick();
    assert_eq!(preview.active().highlight_type(), HighlightType::RailStation);
}

#[test]
fn test_replacing_preview_redraws_old_footprint() {
    let mut preview = TestPreview::new();
    preview
        .set_preview(ObjectHighlight::make_rail_depot(TileIndex(100), DiagDirection::NE))
        .tick();
    preview.take_dirty_tiles();

    preview.set_preview(ObjectHighlight::none()).tick();

    let dirty = preview.take_dirty_tiles();
    assert_eq!(dirty, vec![TileIndex(99), TileIndex(100)]);
    assert!(preview.active().cached_tiles().unwrap().is_empty());
}

#[test]
fn test_copy_blueprint_fills_clipboard() {
    let mut preview = TestPreview::new();
    assert!(preview.clipboard().is_empty());
    preview.copy_blueprint(sample_blueprint()).tick();
    assert_eq!(
        preview.clipboard().get().map(|bp| (**bp).clone()),
        Some(sample_blueprint())
    );
}

#[test]
fn test_rotate_clipboard_retargets_preview() {
    let mut preview = TestPreview::new();
    preview.copy_blueprint(sample_blueprint()).tick();
    let copied = preview.clipboard().get().cloned().unwrap();
    let anchor = preview.map().tile_xy(40, 40).unwrap();
    preview
        .set_preview(ObjectHighlight::make_blueprint(anchor, copied.clone()))
        .tick();
    preview.take_dirty_tiles();

    preview.rotate_clipboard().tick();

    let rotated = preview.clipboard().get().cloned().unwrap();
    assert!(!Arc::ptr_eq(&rotated, &copied));
    assert_eq!(*rotated, copied.rotate());

    let (shown_anchor, shown) = preview.active().blueprint().unwrap();
    assert_eq!(shown_anchor, anchor);
    assert!(Arc::ptr_eq(shown, &rotated));
    assert!(!preview.active().is_stale());
    assert!(!preview.take_dirty_tiles().is_empty());
}

#[test]
fn test_rotate_clipboard_leaves_unrelated_preview() {
    let mut preview = TestPreview::new();
    let station = ObjectHighlight::make_rail_station(TileIndex(10), TileIndex(12), Axis::X);
    preview
        .copy_blueprint(sample_blueprint())
        .set_preview(station.clone())
        .tick();

    preview.rotate_clipboard().tick();

    assert_eq!(*preview.active(), station);
    assert_eq!(
        preview.clipboard().get().map(|bp| (**bp).clone()),
        Some(sample_blueprint().rotate())
    );
}

#[test]
fn test_rotate_empty_clipboard_is_noop() {
    let mut preview = TestPreview::new();
    preview.rotate_clipboard().tick();
    assert!(preview.clipboard().is_empty());
    assert_eq!(preview.active().highlight_type(), HighlightType::None);
}

#[test]
fn test_settings_change_rebuilds_preview() {
    let mut preview = TestPreview::new();
    preview
        .set_preview(ObjectHighlight::make_rail_station(
            TileIndex(10),
            TileIndex(12),
            Axis::X,
        ))
        .tick();

    preview.settings_mut().palette = PALETTE_TINT_RED;
    preview.tick();

    let tiles = preview.active().cached_tiles().unwrap();
    assert_eq!(tiles.len(), 3);
    assert!(tiles.iter().all(|(_, h)| h.palette == PALETTE_TINT_RED));
}

#[test]
fn test_map_resize_clips_preview() {
    let mut preview = TestPreview::new();
    let mut run = Blueprint::new();
    run.add(
        TileIndex(0),
        BlueprintItem::rail_track(TileOffset::new(0, 0), 4, Trackdir::XSw),
    );
    // (6, 0) on both maps: the run covers x = 6..=9.
    preview
        .set_preview(ObjectHighlight::make_blueprint(TileIndex(6), Arc::new(run)))
        .tick();
    assert_eq!(preview.active().cached_tiles().unwrap().len(), 4);
    preview.take_dirty_tiles();

    preview.set_map_size(8, 8).tick();

    let tiles: Vec<TileIndex> = preview.active().cached_tiles().unwrap().tiles().collect();
    assert_eq!(tiles, vec![TileIndex(6), TileIndex(7)]);
    let dirty = preview.take_dirty_tiles();
    assert!(dirty.contains(&TileIndex(6)));
    assert!(dirty.contains(&TileIndex(7)));
}
