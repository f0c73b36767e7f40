//! The `Blueprint` container: items, source-tile membership, rotation and
//! flattening to absolute tiles.

use std::collections::BTreeSet;

use bevy::prelude::*;

use crate::config::PALETTE_TINT_WHITE;
use crate::multimap::TileMultimap;
use crate::tile::{MapSize, TileIndex, TileOffset};
use crate::tile_highlight::ObjectTileHighlight;
use crate::types::{PaletteId, StationId};

use super::item::{offset_rect, station_part_tiles, track_run, BlueprintItem, BlueprintItemKind};

/// A relocatable construction layout captured relative to an anchor tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blueprint {
    items: Vec<BlueprintItem>,
    /// Absolute tiles the items were captured from. Membership only; never
    /// used to place anything.
    source_tiles: BTreeSet<TileIndex>,
}

impl Blueprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item`, recording `source_tile` as captured.
    pub fn add(&mut self, source_tile: TileIndex, item: BlueprintItem) {
        self.items.push(item);
        self.source_tiles.insert(source_tile);
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.source_tiles.clear();
    }

    pub fn has_source_tile(&self, tile: TileIndex) -> bool {
        self.source_tiles.contains(&tile)
    }

    pub fn items(&self) -> &[BlueprintItem] {
        &self.items
    }

    pub fn source_tiles(&self) -> &BTreeSet<TileIndex> {
        &self.source_tiles
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A new blueprint turned a quarter about the anchor. `self` is untouched
    /// and the source-tile set is carried over as captured.
    pub fn rotate(&self) -> Blueprint {
        Blueprint {
            items: self.items.iter().map(BlueprintItem::rotated).collect(),
            source_tiles: self.source_tiles.clone(),
        }
    }

    /// Bounding offsets `(min, max)` of every tile the items render on, or
    /// `None` for an empty blueprint.
    pub fn extent(&self) -> Option<(TileOffset, TileOffset)> {
        self.items
            .iter()
            .flat_map(BlueprintItem::footprint)
            .fold(None, |acc, off| match acc {
                None => Some((off, off)),
                Some((lo, hi)) => Some((
                    TileOffset::new(lo.x.min(off.x), lo.y.min(off.y)),
                    TileOffset::new(hi.x.max(off.x), hi.y.max(off.y)),
                )),
            })
    }

    /// Station signs with their offsets, in item order.
    pub fn station_signs(&self) -> impl Iterator<Item = (TileOffset, StationId)> + '_ {
        self.items.iter().filter_map(|item| match item.kind {
            BlueprintItemKind::RailStation { id, .. } => Some((item.offset, id)),
            _ => None,
        })
    }

    /// Flatten to absolute tiles at `anchor` with the neutral preview tint.
    pub fn get_tiles(&self, anchor: TileIndex, map: &MapSize) -> TileMultimap {
        self.get_tiles_with_palette(anchor, map, PALETTE_TINT_WHITE)
    }

    /// Flatten to absolute tiles at `anchor`. Tiles falling off the map are
    /// dropped; a bridge or tunnel is dropped whole when either head is off
    /// the map, since its heads name each other.
    pub fn get_tiles_with_palette(
        &self,
        anchor: TileIndex,
        map: &MapSize,
        palette: PaletteId,
    ) -> TileMultimap {
        let mut out = Flattener {
            map,
            anchor,
            tiles: TileMultimap::new(),
            skipped: 0,
        };

        for item in &self.items {
            match item.kind {
                BlueprintItemKind::RailDepot { ddir } => {
                    out.put(item.offset, ObjectTileHighlight::make_rail_depot(palette, ddir));
                }
                BlueprintItemKind::RailTrack { length, start_dir } => {
                    for (offset, dir) in track_run(item.offset, length, start_dir) {
                        out.put(offset, ObjectTileHighlight::make_rail_track(palette, dir.track()));
                    }
                }
                BlueprintItemKind::RailStation { id, has_part } => {
                    let hl = if has_part {
                        ObjectTileHighlight::make_numbered_rect(palette, id.0 as u32)
                    } else {
                        ObjectTileHighlight::make_point(palette)
                    };
                    out.put(item.offset, hl);
                }
                BlueprintItemKind::RailStationPart {
                    axis,
                    numtracks,
                    plat_len,
                    ..
                } => {
                    for (offset, section) in station_part_tiles(item.offset, axis, numtracks, plat_len)
                    {
                        out.put(
                            offset,
                            ObjectTileHighlight::make_rail_station(palette, axis, section),
                        );
                    }
                }
                BlueprintItemKind::RailSignal {
                    trackdir,
                    signal_type,
                    variant,
                    twoway,
                } => {
                    out.put(
                        item.offset,
                        ObjectTileHighlight::make_rail_signal(
                            palette,
                            trackdir.index(),
                            signal_type,
                            variant,
                        ),
                    );
                    if twoway {
                        out.put(
                            item.offset,
                            ObjectTileHighlight::make_rail_signal(
                                palette,
                                trackdir.reverse().index(),
                                signal_type,
                                variant,
                            ),
                        );
                    }
                }
                BlueprintItemKind::RailBridge {
                    ddir,
                    other_end,
                    bridge_type,
                } => {
                    out.put_pair(item.offset, other_end, |partner, reversed| {
                        let dir = if reversed { ddir.reverse() } else { ddir };
                        ObjectTileHighlight::make_rail_bridge_head(palette, dir, partner, bridge_type)
                    });
                }
                BlueprintItemKind::RailTunnel { ddir, other_end } => {
                    out.put_pair(item.offset, other_end, |_, reversed| {
                        let dir = if reversed { ddir.reverse() } else { ddir };
                        ObjectTileHighlight::make_rail_tunnel_head(palette, dir)
                    });
                }
                BlueprintItemKind::RoadStop {
                    orientation,
                    other_end,
                    road_type,
                    is_truck,
                } => {
                    for offset in offset_rect(item.offset, other_end) {
                        out.put(
                            offset,
                            ObjectTileHighlight::make_road_stop(
                                palette,
                                road_type,
                                orientation,
                                is_truck,
                            ),
                        );
                    }
                }
                BlueprintItemKind::RoadDepot { ddir, road_type } => {
                    out.put(
                        item.offset,
                        ObjectTileHighlight::make_road_depot(palette, road_type, ddir),
                    );
                }
            }
        }

        if out.skipped > 0 {
            debug!(
                "Blueprint at tile {}: {} tile(s) off the map were omitted",
                anchor.0, out.skipped
            );
        }
        out.tiles
    }
}

/// Accumulates flattened highlights and counts what fell off the map.
struct Flattener<'a> {
    map: &'a MapSize,
    anchor: TileIndex,
    tiles: TileMultimap,
    skipped: usize,
}

impl Flattener<'_> {
    fn put(&mut self, offset: TileOffset, hl: ObjectTileHighlight) {
        match self.map.add_offset(self.anchor, offset) {
            Some(tile) => self.tiles.insert(tile, hl),
            None => self.skipped += 1,
        }
    }

    /// Place both heads of a two-ended construction or neither. `make`
    /// receives `(partner tile, is_far_head)`.
    fn put_pair(
        &mut self,
        near: TileOffset,
        far: TileOffset,
        make: impl Fn(TileIndex, bool) -> ObjectTileHighlight,
    ) {
        let (Some(near_tile), Some(far_tile)) = (
            self.map.add_offset(self.anchor, near),
            self.map.add_offset(self.anchor, far),
        ) else {
            self.skipped += 1;
            return;
        };
        self.tiles.insert(near_tile, make(far_tile, false));
        self.tiles.insert(far_tile, make(near_tile, true));
    }
}
