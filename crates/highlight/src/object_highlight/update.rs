//! Derivation of the tile overlays and sprites from preview geometry.

use bevy::prelude::*;

use placement::config::SPR_STATION_SIGN;
use placement::direction::{Axis, DiagDirection, Trackdir};
use placement::layouts::LayoutTile;
use placement::types::PaletteId;
use placement::{MapSize, ObjectTileHighlight, TileArea, TileIndex};

use crate::detached::DetachedHighlight;

use super::{HighlightCache, HighlightContext, HighlightGeometry, ObjectHighlight, TrackRun};

impl ObjectHighlight {
    /// Rebuild the overlays and sprites from the current geometry. Anything
    /// that would land off the map, and layouts missing from the tables, is
    /// left out.
    pub fn update_tiles(&mut self, ctx: &HighlightContext) {
        let cache = &mut self.cache;
        cache.reset();
        let map = ctx.map;
        let palette = ctx.settings.palette;

        match &self.geometry {
            HighlightGeometry::None => {}
            HighlightGeometry::RailDepot { tile, ddir } => {
                if map.contains(*tile) {
                    cache.add_tile(*tile, ObjectTileHighlight::make_rail_depot(palette, *ddir));
                    if ctx.settings.show_depot_connection {
                        place_extra_depot_rail(cache, map, palette, *tile, *ddir);
                    }
                }
            }
            HighlightGeometry::RoadDepot {
                tile,
                road_type,
                ddir,
            } => {
                if map.contains(*tile) {
                    cache.add_tile(
                        *tile,
                        ObjectTileHighlight::make_road_depot(palette, *road_type, *ddir),
                    );
                    if ctx.settings.show_depot_connection {
                        place_extra_depot_road(cache, map, palette, *tile, *ddir);
                    }
                }
            }
            HighlightGeometry::RailStation { start, end, axis } => {
                if let Some(area) = TileArea::from_corners(map, *start, *end) {
                    for tile in area.tiles(map) {
                        let (x, y) = (map.tile_x(tile) as i32, map.tile_y(tile) as i32);
                        let along = match axis {
                            Axis::X => x - area.min_x,
                            Axis::Y => y - area.min_y,
                        };
                        let section = u8::try_from(along).unwrap_or(u8::MAX);
                        cache.add_tile(
                            tile,
                            ObjectTileHighlight::make_rail_station(palette, *axis, section),
                        );
                    }
                }
            }
            HighlightGeometry::RoadStop {
                start,
                end,
                road_type,
                orientation,
                is_truck,
            } => {
                if let Some(area) = TileArea::from_corners(map, *start, *end) {
                    for tile in area.tiles(map) {
                        cache.add_tile(
                            tile,
                            ObjectTileHighlight::make_road_stop(
                                palette,
                                *road_type,
                                *orientation,
                                *is_truck,
                            ),
                        );
                    }
                }
            }
            HighlightGeometry::Airport {
                tile,
                airport_type,
                layout,
            } => match ctx.layouts.airport_layout(*airport_type, *layout) {
                Some(tiles) => place_layout(cache, map, *tile, tiles, |lt| {
                    ObjectTileHighlight::make_airport_tile(palette, lt.gfx)
                }),
                None => debug!(
                    "Airport preview: no layout {} for airport type {}",
                    layout, airport_type.0
                ),
            },
            HighlightGeometry::Industry {
                tile,
                industry_type,
                layout,
            } => match ctx.layouts.industry_layout(*industry_type, *layout) {
                Some(tiles) => place_layout(cache, map, *tile, tiles, |_| {
                    ObjectTileHighlight::make_point(palette)
                }),
                None => debug!(
                    "Industry preview: no layout {} for industry type {}",
                    layout, industry_type.0
                ),
            },
            HighlightGeometry::Blueprint { tile, blueprint } => {
                cache
                    .tiles
                    .extend(blueprint.get_tiles_with_palette(*tile, map, palette));
                if ctx.settings.show_station_labels {
                    for (offset, _) in blueprint.station_signs() {
                        let pt = map
                            .add_offset(*tile, offset)
                            .and_then(|sign| map.tile_pixel_center(sign));
                        if let Some(pt) = pt {
                            cache
                                .sprites
                                .push(DetachedHighlight::new(pt, SPR_STATION_SIGN, palette));
                        }
                    }
                }
            }
            HighlightGeometry::Polyrail { first, second } => {
                for run in first.iter().chain(second.iter()) {
                    place_track_run(cache, map, palette, run);
                }
            }
        }

        cache.tiles_updated = true;
        trace!(
            "Preview {:?}: {} overlay(s) on {} tile(s), {} sprite(s)",
            self.geometry.highlight_type(),
            cache.tiles.len(),
            cache.tiles.tile_count(),
            cache.sprites.len()
        );
    }
}

/// The track a rail depot connects to, on the tile in front of its mouth.
fn place_extra_depot_rail(
    cache: &mut HighlightCache,
    map: &MapSize,
    palette: PaletteId,
    tile: TileIndex,
    ddir: DiagDirection,
) {
    if let Some(front) = map.step(tile, ddir) {
        cache.add_tile(
            front,
            ObjectTileHighlight::make_rail_track(palette, ddir.axis().track()),
        );
    }
}

fn place_extra_depot_road(
    cache: &mut HighlightCache,
    map: &MapSize,
    palette: PaletteId,
    tile: TileIndex,
    ddir: DiagDirection,
) {
    if let Some(front) = map.step(tile, ddir) {
        cache.add_tile(front, ObjectTileHighlight::make_point(palette));
    }
}

fn place_layout(
    cache: &mut HighlightCache,
    map: &MapSize,
    origin: TileIndex,
    layout: &[LayoutTile],
    make: impl Fn(&LayoutTile) -> ObjectTileHighlight,
) {
    for lt in layout {
        if let Some(tile) = map.add_offset(origin, lt.offset) {
            cache.add_tile(tile, make(lt));
        }
    }
}

/// Tiles and trackdirs a run lays, from `start` until `end`. A run whose
/// end is not on its line stops at the map edge or after `width + height`
/// tiles.
pub(super) fn track_run_tiles(map: &MapSize, run: &TrackRun) -> Vec<(TileIndex, Trackdir)> {
    let mut laid = Vec::new();
    if !map.contains(run.start) {
        return laid;
    }
    let limit = (map.width() + map.height()) as usize;
    let mut tile = run.start;
    let mut dir = run.trackdir;
    for _ in 0..limit {
        laid.push((tile, dir));
        if tile == run.end {
            return laid;
        }
        let Some(next) = map.step(tile, dir.exit_dir()) else {
            break;
        };
        tile = next;
        dir = dir.next();
    }
    debug!(
        "Polyrail run from tile {} never reached tile {}",
        run.start.0, run.end.0
    );
    laid
}

fn place_track_run(cache: &mut HighlightCache, map: &MapSize, palette: PaletteId, run: &TrackRun) {
    for (tile, dir) in track_run_tiles(map, run) {
        cache.add_tile(tile, ObjectTileHighlight::make_rail_track(palette, dir.track()));
    }
}
