//! The live placement preview.
//!
//! `ObjectHighlight` holds the geometry of whatever the player is about to
//! build and lazily derives from it the per-tile overlays and floating
//! sprites the renderer paints. The derived state is a cache: it is rebuilt
//! in one pass by `update_tiles` and every reader forces that rebuild first
//! when the cache is stale, so draws never observe a half-built result.
//!
//! New previews are made with the `make_*` constructors and swapped in by
//! assignment. Comparing two previews compares geometry only, which lets the
//! owner skip redraws when a drag did not actually move anything.

mod draw;
mod geometry;
mod update;


use std::sync::Arc;

use placement::direction::{Axis, DiagDirection};
use placement::layouts::LayoutTables;
use placement::types::{AirportType, IndustryType, RoadType};
use placement::{Blueprint, MapSize, ObjectTileHighlight, RoadStopOrientation, TileIndex, TileMultimap};

use crate::detached::DetachedHighlight;
use crate::settings::HighlightSettings;

pub use geometry::{HighlightGeometry, HighlightType, SharedBlueprint, TrackRun};

// =============================================================================
// Context and cache
// =============================================================================

/// Everything outside the preview that derivation reads.
#[derive(Debug, Clone, Copy)]
pub struct HighlightContext<'a> {
    pub map: &'a MapSize,
    pub layouts: &'a LayoutTables,
    pub settings: &'a HighlightSettings,
}

impl<'a> HighlightContext<'a> {
    pub fn new(map: &'a MapSize, layouts: &'a LayoutTables, settings: &'a HighlightSettings) -> Self {
        Self {
            map,
            layouts,
            settings,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct HighlightCache {
    tiles_updated: bool,
    tiles: TileMultimap,
    sprites: Vec<DetachedHighlight>,
}

impl HighlightCache {
    /// Not idempotent: a second call for the same tile stacks another overlay.
    fn add_tile(&mut self, tile: TileIndex, highlight: ObjectTileHighlight) {
        self.tiles.insert(tile, highlight);
    }

    fn reset(&mut self) {
        self.tiles.clear();
        self.sprites.clear();
        self.tiles_updated = false;
    }
}

// =============================================================================
// ObjectHighlight
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ObjectHighlight {
    geometry: HighlightGeometry,
    cache: HighlightCache,
}

impl PartialEq for ObjectHighlight {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry
    }
}

impl Eq for ObjectHighlight {}

impl ObjectHighlight {
    fn with_geometry(geometry: HighlightGeometry) -> Self {
        Self {
            geometry,
            cache: HighlightCache::default(),
        }
    }

    /// No preview.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn make_rail_depot(tile: TileIndex, ddir: DiagDirection) -> Self {
        Self::with_geometry(HighlightGeometry::RailDepot { tile, ddir })
    }

    pub fn make_rail_station(start: TileIndex, end: TileIndex, axis: Axis) -> Self {
        Self::with_geometry(HighlightGeometry::RailStation { start, end, axis })
    }

    pub fn make_road_stop(
        start: TileIndex,
        end: TileIndex,
        road_type: RoadType,
        orientation: RoadStopOrientation,
        is_truck: bool,
    ) -> Self {
        Self::with_geometry(HighlightGeometry::RoadStop {
            start,
            end,
            road_type,
            orientation,
            is_truck,
        })
    }

    pub fn make_road_depot(tile: TileIndex, road_type: RoadType, ddir: DiagDirection) -> Self {
        Self::with_geometry(HighlightGeometry::RoadDepot {
            tile,
            road_type,
            ddir,
        })
    }

    pub fn make_airport(tile: TileIndex, airport_type: AirportType, layout: u8) -> Self {
        Self::with_geometry(HighlightGeometry::Airport {
            tile,
            airport_type,
            layout,
        })
    }

    /// Preview `blueprint` anchored at `tile`. The blueprint is shared, not
    /// copied, and must not be mutated while the preview holds it.
    pub fn make_blueprint(tile: TileIndex, blueprint: Arc<Blueprint>) -> Self {
        Self::with_geometry(HighlightGeometry::Blueprint {
            tile,
            blueprint: SharedBlueprint(blueprint),
        })
    }

    pub fn make_polyrail(first: Option<TrackRun>, second: Option<TrackRun>) -> Self {
        Self::with_geometry(HighlightGeometry::Polyrail { first, second })
    }

    pub fn make_industry(tile: TileIndex, industry_type: IndustryType, layout: u32) -> Self {
        Self::with_geometry(HighlightGeometry::Industry {
            tile,
            industry_type,
            layout,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn highlight_type(&self) -> HighlightType {
        self.geometry.highlight_type()
    }

    pub fn geometry(&self) -> &HighlightGeometry {
        &self.geometry
    }

    /// Anchor and blueprint of a blueprint preview.
    pub fn blueprint(&self) -> Option<(TileIndex, &Arc<Blueprint>)> {
        match &self.geometry {
            HighlightGeometry::Blueprint { tile, blueprint } => Some((*tile, &blueprint.0)),
            _ => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        !self.cache.tiles_updated
    }

    /// Mark the derived state stale; the next reader rebuilds it. The old
    /// overlays stay until then so `mark_dirty` can still repaint them.
    pub fn invalidate(&mut self) {
        self.cache.tiles_updated = false;
    }

    /// Derived overlays, rebuilt first if stale.
    pub fn tiles(&mut self, ctx: &HighlightContext) -> &TileMultimap {
        self.ensure_updated(ctx);
        &self.cache.tiles
    }

    /// Floating sprites, rebuilt first if stale.
    pub fn sprites(&mut self, ctx: &HighlightContext) -> &[DetachedHighlight] {
        self.ensure_updated(ctx);
        &self.cache.sprites
    }

    /// The cached overlays without rebuilding, or `None` while stale.
    pub fn cached_tiles(&self) -> Option<&TileMultimap> {
        self.cache.tiles_updated.then_some(&self.cache.tiles)
    }

    fn ensure_updated(&mut self, ctx: &HighlightContext) {
        if self.is_stale() {
            self.update_tiles(ctx);
        }
    }
}
