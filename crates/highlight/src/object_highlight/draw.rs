//! Handing the derived preview to a rendering backend.

use placement::layouts::layout_extent;
use placement::{MapSize, TileArea, TileIndex, TileOffset};

use crate::backend::{DrawContext, HighlightBackend, TileInfo};

use super::update::track_run_tiles;
use super::{HighlightContext, HighlightGeometry, ObjectHighlight};

impl ObjectHighlight {
    /// Draw every overlay stacked on the tile being painted.
    pub fn draw(&mut self, ctx: &HighlightContext, ti: &TileInfo, backend: &mut dyn HighlightBackend) {
        self.ensure_updated(ctx);
        for highlight in self.cache.tiles.get(ti.tile) {
            backend.draw_tile_highlight(ti, highlight);
        }
    }

    /// Draw the floating sprites.
    pub fn draw_overlay(
        &mut self,
        ctx: &HighlightContext,
        dpi: &DrawContext,
        backend: &mut dyn HighlightBackend,
    ) {
        self.ensure_updated(ctx);
        for sprite in &self.cache.sprites {
            backend.draw_detached(dpi, sprite);
        }
    }

    /// Schedule a redraw of every tile the preview covers. A fresh cache is
    /// marked exactly; a stale one also gets a bounding region derived from
    /// the geometry, since its contents may not match what is on screen.
    /// Never rebuilds the cache.
    pub fn mark_dirty(&self, ctx: &HighlightContext, backend: &mut dyn HighlightBackend) {
        for tile in self.cache.tiles.tiles() {
            backend.mark_tile_dirty(tile);
        }
        if self.cache.tiles_updated {
            return;
        }
        for area in self.conservative_areas(ctx) {
            for tile in area.tiles(ctx.map) {
                backend.mark_tile_dirty(tile);
            }
        }
    }

    fn conservative_areas(&self, ctx: &HighlightContext) -> Vec<TileArea> {
        let map = ctx.map;
        match &self.geometry {
            HighlightGeometry::None => Vec::new(),
            // The depot plus its connection stub.
            HighlightGeometry::RailDepot { tile, .. } | HighlightGeometry::RoadDepot { tile, .. } => {
                TileArea::single(map, *tile)
                    .map(|area| area.expanded(1))
                    .into_iter()
                    .collect()
            }
            HighlightGeometry::RailStation { start, end, .. }
            | HighlightGeometry::RoadStop { start, end, .. } => {
                TileArea::from_corners(map, *start, *end).into_iter().collect()
            }
            HighlightGeometry::Airport {
                tile,
                airport_type,
                layout,
            } => ctx
                .layouts
                .airport_layout(*airport_type, *layout)
                .and_then(layout_extent)
                .and_then(|(lo, hi)| offset_area(map, *tile, lo, hi))
                .into_iter()
                .collect(),
            HighlightGeometry::Industry {
                tile,
                industry_type,
                layout,
            } => ctx
                .layouts
                .industry_layout(*industry_type, *layout)
                .and_then(layout_extent)
                .and_then(|(lo, hi)| offset_area(map, *tile, lo, hi))
                .into_iter()
                .collect(),
            HighlightGeometry::Blueprint { tile, blueprint } => blueprint
                .extent()
                .and_then(|(lo, hi)| offset_area(map, *tile, lo, hi))
                .into_iter()
                .collect(),
            // The walked line, which runs past `end` when `end` is off it.
            HighlightGeometry::Polyrail { first, second } => first
                .iter()
                .chain(second.iter())
                .flat_map(|run| track_run_tiles(map, run))
                .filter_map(|(tile, _)| TileArea::single(map, tile))
                .collect(),
        }
    }
}

/// Area spanned by `origin + lo ..= origin + hi`; may extend off the map.
fn offset_area(map: &MapSize, origin: TileIndex, lo: TileOffset, hi: TileOffset) -> Option<TileArea> {
    let (x, y) = map.coords(origin)?;
    Some(TileArea {
        min_x: x + lo.x,
        min_y: y + lo.y,
        max_x: x + hi.x,
        max_y: y + hi.y,
    })
}
