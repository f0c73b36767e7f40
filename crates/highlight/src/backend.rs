//! The seam between the preview and whatever paints it.
//!
//! `ObjectHighlight` never touches sprites or game state. It hands each
//! overlay to a `HighlightBackend`, which resolves sprites and palettes and
//! schedules redraws. `DrawQueue` is the in-engine backend: it records the
//! commands for a render system to drain each frame.

use std::collections::BTreeSet;

use bevy::prelude::*;

use placement::{ObjectTileHighlight, TileIndex};

use crate::detached::DetachedHighlight;

/// The tile the renderer is currently painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileInfo {
    pub tile: TileIndex,
    /// World position of the tile's north corner.
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl TileInfo {
    pub fn new(tile: TileIndex, x: i32, y: i32, z: i32) -> Self {
        Self { tile, x, y, z }
    }
}

/// Viewport region being drawn, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawContext {
    pub rect: IRect,
    pub zoom: u8,
}

pub trait HighlightBackend {
    fn draw_tile_highlight(&mut self, ti: &TileInfo, highlight: &ObjectTileHighlight);
    fn draw_detached(&mut self, dpi: &DrawContext, sprite: &DetachedHighlight);
    fn mark_tile_dirty(&mut self, tile: TileIndex);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Tile {
        ti: TileInfo,
        highlight: ObjectTileHighlight,
    },
    Detached {
        dpi: DrawContext,
        sprite: DetachedHighlight,
    },
}

/// Recording backend. Render systems drain it once per frame.
#[derive(Resource, Debug, Default)]
pub struct DrawQueue {
    pub commands: Vec<DrawCommand>,
    pub dirty_tiles: BTreeSet<TileIndex>,
}

impl DrawQueue {
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn take_dirty_tiles(&mut self) -> Vec<TileIndex> {
        std::mem::take(&mut self.dirty_tiles).into_iter().collect()
    }

    pub fn has_dirty_tiles(&self) -> bool {
        !self.dirty_tiles.is_empty()
    }
}

impl HighlightBackend for DrawQueue {
    fn draw_tile_highlight(&mut self, ti: &TileInfo, highlight: &ObjectTileHighlight) {
        self.commands.push(DrawCommand::Tile {
            ti: *ti,
            highlight: *highlight,
        });
    }

    fn draw_detached(&mut self, dpi: &DrawContext, sprite: &DetachedHighlight) {
        self.commands.push(DrawCommand::Detached {
            dpi: *dpi,
            sprite: *sprite,
        });
    }

    fn mark_tile_dirty(&mut self, tile: TileIndex) {
        self.dirty_tiles.insert(tile);
    }
}
