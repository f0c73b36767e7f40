//! Per-tile preview overlays.
//!
//! An `ObjectTileHighlight` says how one tile should be painted while a
//! construction preview is active. The payload is a closed enum, so a
//! highlight can only ever carry the fields of its own kind.

use crate::direction::{Axis, DiagDirection, Track};
use crate::tile::TileIndex;
use crate::types::{BridgeType, PaletteId, RoadType, SignalType, SignalVariant, StationGfx};

/// Which way a road stop is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadStopOrientation {
    /// Bay stop with a single entrance on the given edge.
    Bay(DiagDirection),
    /// Drive-through stop, open on both ends of the axis.
    DriveThrough(Axis),
}

impl RoadStopOrientation {
    pub fn rotated(self) -> Self {
        match self {
            RoadStopOrientation::Bay(dir) => RoadStopOrientation::Bay(dir.rotated()),
            RoadStopOrientation::DriveThrough(axis) => {
                RoadStopOrientation::DriveThrough(axis.rotated())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileHighlightKind {
    RailDepot {
        ddir: DiagDirection,
    },
    RailTrack {
        track: Track,
    },
    RailStation {
        axis: Axis,
        section: u8,
    },
    RailSignal {
        pos: u8,
        signal_type: SignalType,
        variant: SignalVariant,
    },
    RailBridgeHead {
        ddir: DiagDirection,
        /// Absolute tile of the opposite bridge head.
        other_end: TileIndex,
        bridge_type: BridgeType,
    },
    RailTunnelHead {
        ddir: DiagDirection,
    },
    RoadStop {
        road_type: RoadType,
        orientation: RoadStopOrientation,
        is_truck: bool,
    },
    RoadDepot {
        road_type: RoadType,
        ddir: DiagDirection,
    },
    AirportTile {
        gfx: StationGfx,
    },
    /// Crosshair marker.
    Point,
    NumberedRect {
        number: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectTileHighlight {
    pub kind: TileHighlightKind,
    pub palette: PaletteId,
}

impl ObjectTileHighlight {
    fn new(palette: PaletteId, kind: TileHighlightKind) -> Self {
        Self { kind, palette }
    }

    pub fn make_rail_depot(palette: PaletteId, ddir: DiagDirection) -> Self {
        Self::new(palette, TileHighlightKind::RailDepot { ddir })
    }

    pub fn make_rail_track(palette: PaletteId, track: Track) -> Self {
        Self::new(palette, TileHighlightKind::RailTrack { track })
    }

    pub fn make_rail_station(palette: PaletteId, axis: Axis, section: u8) -> Self {
        Self::new(palette, TileHighlightKind::RailStation { axis, section })
    }

    pub fn make_rail_signal(
        palette: PaletteId,
        pos: u8,
        signal_type: SignalType,
        variant: SignalVariant,
    ) -> Self {
        Self::new(
            palette,
            TileHighlightKind::RailSignal {
                pos,
                signal_type,
                variant,
            },
        )
    }

    pub fn make_rail_bridge_head(
        palette: PaletteId,
        ddir: DiagDirection,
        other_end: TileIndex,
        bridge_type: BridgeType,
    ) -> Self {
        Self::new(
            palette,
            TileHighlightKind::RailBridgeHead {
                ddir,
                other_end,
                bridge_type,
            },
        )
    }

    pub fn make_rail_tunnel_head(palette: PaletteId, ddir: DiagDirection) -> Self {
        Self::new(palette, TileHighlightKind::RailTunnelHead { ddir })
    }

    pub fn make_road_stop(
        palette: PaletteId,
        road_type: RoadType,
        orientation: RoadStopOrientation,
        is_truck: bool,
    ) -> Self {
        Self::new(
            palette,
            TileHighlightKind::RoadStop {
                road_type,
                orientation,
                is_truck,
            },
        )
    }

    pub fn make_road_depot(palette: PaletteId, road_type: RoadType, ddir: DiagDirection) -> Self {
        Self::new(palette, TileHighlightKind::RoadDepot { road_type, ddir })
    }

    pub fn make_airport_tile(palette: PaletteId, gfx: StationGfx) -> Self {
        Self::new(palette, TileHighlightKind::AirportTile { gfx })
    }

    pub fn make_point(palette: PaletteId) -> Self {
        Self::new(palette, TileHighlightKind::Point)
    }

    pub fn make_numbered_rect(palette: PaletteId, number: u32) -> Self {
        Self::new(palette, TileHighlightKind::NumberedRect { number })
    }
}
