//! Typed identifiers shared by blueprints and tile highlights.
//!
//! These are opaque handles into game data owned elsewhere (road/rail type
//! tables, sprite sheets, station pools). The preview core only copies them
//! around and hands them to the drawing backend.

use serde::{Deserialize, Serialize};

/// Sprite sheet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpriteId(pub u32);

/// Colour remap applied to a sprite at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaletteId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoadType(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BridgeType(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub u16);

/// Graphics index of one airport tile within its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationGfx(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirportType(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndustryType(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignalType {
    #[default]
    Block,
    Entry,
    Exit,
    Combo,
    Pbs,
    PbsOneway,
}

/// Signal polarity: light signals or mechanical semaphores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignalVariant {
    #[default]
    Electric,
    Semaphore,
}
