use crate::types::{PaletteId, SpriteId};

pub const MAP_SIZE_X: u32 = 256;
pub const MAP_SIZE_Y: u32 = 256;
/// Largest map edge in tiles; `MAP_EDGE_MAX^2` still fits a `u32` index.
pub const MAP_EDGE_MAX: u32 = 4096;

/// World units per tile edge. Pixel projection works in these units.
pub const TILE_SIZE: i32 = 16;

/// Neutral preview tint, used when a placement is not known to be invalid.
pub const PALETTE_TINT_WHITE: PaletteId = PaletteId(0x305);
/// Tint for removal or rejected previews.
pub const PALETTE_TINT_RED: PaletteId = PaletteId(0x303);

/// Floating sign drawn above a blueprint's station sign tile.
pub const SPR_STATION_SIGN: SpriteId = SpriteId(0x4d6);
