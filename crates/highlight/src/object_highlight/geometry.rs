//! Preview geometry: one variant per kind of object being placed.

use std::ops::Deref;
use std::sync::Arc;

use placement::direction::{Axis, DiagDirection, Trackdir};
use placement::types::{AirportType, IndustryType, RoadType};
use placement::{Blueprint, RoadStopOrientation, TileIndex};

/// Which kind of object is being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighlightType {
    #[default]
    None,
    RailDepot,
    RailStation,
    RoadStop,
    RoadDepot,
    Airport,
    Blueprint,
    Polyrail,
    Industry,
}

/// One straight or diagonal leg of a polyrail preview, from `start` to `end`
/// inclusive, laid with `trackdir` on the first tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackRun {
    pub start: TileIndex,
    pub end: TileIndex,
    pub trackdir: Trackdir,
}

impl TrackRun {
    pub fn new(start: TileIndex, end: TileIndex, trackdir: Trackdir) -> Self {
        Self {
            start,
            end,
            trackdir,
        }
    }
}

/// A blueprint shared between the preview and whoever holds it for
/// re-placement. Two handles are equal only when they point at the same
/// allocation.
#[derive(Debug, Clone)]
pub struct SharedBlueprint(pub Arc<Blueprint>);

impl PartialEq for SharedBlueprint {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SharedBlueprint {}

impl Deref for SharedBlueprint {
    type Target = Blueprint;

    fn deref(&self) -> &Blueprint {
        &self.0
    }
}

/// Placement geometry of the active preview. Each variant carries only the
/// fields its kind uses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HighlightGeometry {
    #[default]
    None,
    RailDepot {
        tile: TileIndex,
        ddir: DiagDirection,
    },
    RailStation {
        start: TileIndex,
        end: TileIndex,
        axis: Axis,
    },
    RoadStop {
        start: TileIndex,
        end: TileIndex,
        road_type: RoadType,
        orientation: RoadStopOrientation,
        is_truck: bool,
    },
    RoadDepot {
        tile: TileIndex,
        road_type: RoadType,
        ddir: DiagDirection,
    },
    Airport {
        tile: TileIndex,
        airport_type: AirportType,
        layout: u8,
    },
    Blueprint {
        tile: TileIndex,
        blueprint: SharedBlueprint,
    },
    /// Either leg may be absent.
    Polyrail {
        first: Option<TrackRun>,
        second: Option<TrackRun>,
    },
    Industry {
        tile: TileIndex,
        industry_type: IndustryType,
        layout: u32,
    },
}

impl HighlightGeometry {
    pub fn highlight_type(&self) -> HighlightType {
        match self {
            HighlightGeometry::None => HighlightType::None,
            HighlightGeometry::RailDepot { .. } => HighlightType::RailDepot,
            HighlightGeometry::RailStation { .. } => HighlightType::RailStation,
            HighlightGeometry::RoadStop { .. } => HighlightType::RoadStop,
            HighlightGeometry::RoadDepot { .. } => HighlightType::RoadDepot,
            HighlightGeometry::Airport { .. } => HighlightType::Airport,
            HighlightGeometry::Blueprint { .. } => HighlightType::Blueprint,
            HighlightGeometry::Polyrail { .. } => HighlightType::Polyrail,
            HighlightGeometry::Industry { .. } => HighlightType::Industry,
        }
    }
}
