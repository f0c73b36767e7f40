//! Blueprint items: construction primitives addressed relative to an anchor.

use crate::direction::{Axis, DiagDirection, Trackdir};
use crate::tile::TileOffset;
use crate::tile_highlight::RoadStopOrientation;
use crate::types::{BridgeType, RoadType, SignalType, SignalVariant, StationId};

// =============================================================================
// Item kinds
// =============================================================================

/// Payload of one blueprint item. Two-tile constructions store their partner
/// as an offset from the same anchor, never as an absolute tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlueprintItemKind {
    RailDepot {
        ddir: DiagDirection,
    },
    /// A straight or diagonal run of `length` track pieces starting with
    /// `start_dir` on the item's own tile.
    RailTrack {
        length: u16,
        start_dir: Trackdir,
    },
    /// Station sign. `has_part` is set when platforms of the same station are
    /// part of the blueprint.
    RailStation {
        id: StationId,
        has_part: bool,
    },
    /// Rectangular platform block whose minimum corner is the item's offset.
    RailStationPart {
        axis: Axis,
        id: StationId,
        numtracks: u8,
        plat_len: u8,
    },
    RailSignal {
        trackdir: Trackdir,
        signal_type: SignalType,
        variant: SignalVariant,
        twoway: bool,
    },
    RailBridge {
        ddir: DiagDirection,
        other_end: TileOffset,
        bridge_type: BridgeType,
    },
    RailTunnel {
        ddir: DiagDirection,
        other_end: TileOffset,
    },
    /// Stops covering the rectangle between the item's offset and `other_end`.
    RoadStop {
        orientation: RoadStopOrientation,
        other_end: TileOffset,
        road_type: RoadType,
        is_truck: bool,
    },
    RoadDepot {
        ddir: DiagDirection,
        road_type: RoadType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlueprintItem {
    /// Primary tile, relative to the blueprint anchor.
    pub offset: TileOffset,
    pub kind: BlueprintItemKind,
}

// =============================================================================
// Constructors
// =============================================================================

impl BlueprintItem {
    pub fn new(offset: TileOffset, kind: BlueprintItemKind) -> Self {
        Self { offset, kind }
    }

    pub fn rail_depot(offset: TileOffset, ddir: DiagDirection) -> Self {
        Self::new(offset, BlueprintItemKind::RailDepot { ddir })
    }

    pub fn rail_track(offset: TileOffset, length: u16, start_dir: Trackdir) -> Self {
        Self::new(offset, BlueprintItemKind::RailTrack { length, start_dir })
    }

    pub fn rail_station(offset: TileOffset, id: StationId, has_part: bool) -> Self {
        Self::new(offset, BlueprintItemKind::RailStation { id, has_part })
    }

    pub fn rail_station_part(
        offset: TileOffset,
        axis: Axis,
        id: StationId,
        numtracks: u8,
        plat_len: u8,
    ) -> Self {
        Self::new(
            offset,
            BlueprintItemKind::RailStationPart {
                axis,
                id,
                numtracks,
                plat_len,
            },
        )
    }

    pub fn rail_signal(
        offset: TileOffset,
        trackdir: Trackdir,
        signal_type: SignalType,
        variant: SignalVariant,
        twoway: bool,
    ) -> Self {
        Self::new(
            offset,
            BlueprintItemKind::RailSignal {
                trackdir,
                signal_type,
                variant,
                twoway,
            },
        )
    }

    pub fn rail_bridge(
        offset: TileOffset,
        ddir: DiagDirection,
        other_end: TileOffset,
        bridge_type: BridgeType,
    ) -> Self {
        Self::new(
            offset,
            BlueprintItemKind::RailBridge {
                ddir,
                other_end,
                bridge_type,
            },
        )
    }

    pub fn rail_tunnel(offset: TileOffset, ddir: DiagDirection, other_end: TileOffset) -> Self {
        Self::new(offset, BlueprintItemKind::RailTunnel { ddir, other_end })
    }

    pub fn road_stop(
        offset: TileOffset,
        orientation: RoadStopOrientation,
        other_end: TileOffset,
        road_type: RoadType,
        is_truck: bool,
    ) -> Self {
        Self::new(
            offset,
            BlueprintItemKind::RoadStop {
                orientation,
                other_end,
                road_type,
                is_truck,
            },
        )
    }

    pub fn road_depot(offset: TileOffset, ddir: DiagDirection, road_type: RoadType) -> Self {
        Self::new(offset, BlueprintItemKind::RoadDepot { ddir, road_type })
    }
}

// =============================================================================
// Geometry
// =============================================================================

/// Width (x) and height (y) of a platform block.
pub(crate) fn station_part_size(axis: Axis, numtracks: u8, plat_len: u8) -> (i32, i32) {
    match axis {
        Axis::X => (plat_len as i32, numtracks as i32),
        Axis::Y => (numtracks as i32, plat_len as i32),
    }
}

/// Tiles of a platform block with each tile's position along the platform.
pub(crate) fn station_part_tiles(
    origin: TileOffset,
    axis: Axis,
    numtracks: u8,
    plat_len: u8,
) -> Vec<(TileOffset, u8)> {
    let (w, h) = station_part_size(axis, numtracks, plat_len);
    let mut tiles = Vec::with_capacity((w.max(0) * h.max(0)) as usize);
    for dy in 0..h {
        for dx in 0..w {
            let section = match axis {
                Axis::X => dx,
                Axis::Y => dy,
            };
            tiles.push((origin + TileOffset::new(dx, dy), section as u8));
        }
    }
    tiles
}

/// Offsets and trackdirs visited by a track run.
pub(crate) fn track_run(origin: TileOffset, length: u16, start_dir: Trackdir) -> Vec<(TileOffset, Trackdir)> {
    let mut pieces = Vec::with_capacity(length as usize);
    let mut pos = origin;
    let mut dir = start_dir;
    for _ in 0..length {
        pieces.push((pos, dir));
        pos = pos + dir.exit_dir().offset();
        dir = dir.next();
    }
    pieces
}

/// Every offset of the inclusive rectangle between two corners.
pub(crate) fn offset_rect(a: TileOffset, b: TileOffset) -> Vec<TileOffset> {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
    let mut out = Vec::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            out.push(TileOffset::new(x, y));
        }
    }
    out
}

impl BlueprintItem {
    /// Every offset this item renders on, partner tiles included.
    pub fn footprint(&self) -> Vec<TileOffset> {
        match self.kind {
            BlueprintItemKind::RailTrack { length, start_dir } => {
                track_run(self.offset, length, start_dir)
                    .into_iter()
                    .map(|(off, _)| off)
                    .collect()
            }
            BlueprintItemKind::RailStationPart {
                axis,
                numtracks,
                plat_len,
                ..
            } => station_part_tiles(self.offset, axis, numtracks, plat_len)
                .into_iter()
                .map(|(off, _)| off)
                .collect(),
            BlueprintItemKind::RailBridge { other_end, .. }
            | BlueprintItemKind::RailTunnel { other_end, .. } => vec![self.offset, other_end],
            BlueprintItemKind::RoadStop { other_end, .. } => offset_rect(self.offset, other_end),
            BlueprintItemKind::RailDepot { .. }
            | BlueprintItemKind::RailStation { .. }
            | BlueprintItemKind::RailSignal { .. }
            | BlueprintItemKind::RoadDepot { .. } => vec![self.offset],
        }
    }

    /// The item after a quarter turn of the whole blueprint about its origin.
    pub fn rotated(&self) -> Self {
        let offset = self.offset.rotated();
        match self.kind {
            BlueprintItemKind::RailDepot { ddir } => Self::rail_depot(offset, ddir.rotated()),
            BlueprintItemKind::RailTrack { length, start_dir } => {
                Self::rail_track(offset, length, start_dir.rotated())
            }
            BlueprintItemKind::RailStation { id, has_part } => {
                Self::rail_station(offset, id, has_part)
            }
            BlueprintItemKind::RailStationPart {
                axis,
                id,
                numtracks,
                plat_len,
            } => {
                // The minimum corner moves: the block's old max-y edge becomes
                // its new min-x edge.
                let (_, h) = station_part_size(axis, numtracks, plat_len);
                let corner = TileOffset::new(-(self.offset.y + h - 1), self.offset.x);
                Self::rail_station_part(corner, axis.rotated(), id, numtracks, plat_len)
            }
            BlueprintItemKind::RailSignal {
                trackdir,
                signal_type,
                variant,
                twoway,
            } => Self::rail_signal(offset, trackdir.rotated(), signal_type, variant, twoway),
            BlueprintItemKind::RailBridge {
                ddir,
                other_end,
                bridge_type,
            } => Self::rail_bridge(offset, ddir.rotated(), other_end.rotated(), bridge_type),
            BlueprintItemKind::RailTunnel { ddir, other_end } => {
                Self::rail_tunnel(offset, ddir.rotated(), other_end.rotated())
            }
            BlueprintItemKind::RoadStop {
                orientation,
                other_end,
                road_type,
                is_truck,
            } => Self::road_stop(
                offset,
                orientation.rotated(),
                other_end.rotated(),
                road_type,
                is_truck,
            ),
            BlueprintItemKind::RoadDepot { ddir, road_type } => {
                Self::road_depot(offset, ddir.rotated(), road_type)
            }
        }
    }
}
