//! Data layer for construction previews: tile addressing, directions,
//! per-tile highlight values and relocatable blueprints.

use bevy::prelude::*;

pub mod blueprints;
pub mod config;
pub mod direction;
pub mod layouts;
pub mod multimap;
pub mod tile;
pub mod tile_highlight;
pub mod types;

pub use blueprints::{Blueprint, BlueprintItem, BlueprintItemKind};
pub use multimap::TileMultimap;
pub use tile::{MapSize, TileArea, TileIndex, TileOffset};
pub use tile_highlight::{ObjectTileHighlight, RoadStopOrientation, TileHighlightKind};

/// Registers the map geometry and layout tables the preview reads.
///
/// Hosts overwrite `MapSize` when a map is loaded and fill `LayoutTables`
/// from their airport and industry definitions.
pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapSize>()
            .init_resource::<layouts::LayoutTables>();
    }
}
