//! Blueprints: relocatable, rotatable construction layouts.
//!
//! A `Blueprint` stores construction items (track runs, stations, signals,
//! bridges, tunnels, depots, road stops) as offsets from an anchor tile, so
//! the same layout can be previewed and stamped anywhere on the map. Rotation
//! turns the whole layout a quarter about the anchor while keeping paired
//! tiles (bridge and tunnel heads, multi-tile stops) consistent.

mod blueprint;
mod item;


pub use blueprint::*;
pub use item::{BlueprintItem, BlueprintItemKind};
