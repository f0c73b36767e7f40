use bevy::prelude::*;

use placement::types::{PaletteId, SpriteId};

/// A sprite drawn at a screen position rather than on a tile, such as the
/// sign label over a blueprint's station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetachedHighlight {
    pub pt: IVec2,
    pub sprite_id: SpriteId,
    pub palette_id: PaletteId,
}

impl DetachedHighlight {
    pub fn new(pt: IVec2, sprite_id: SpriteId, palette_id: PaletteId) -> Self {
        Self {
            pt,
            sprite_id,
            palette_id,
        }
    }
}
