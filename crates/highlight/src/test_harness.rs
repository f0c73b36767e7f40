//! # TestPreview: headless harness for the preview plugin
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + `HighlightPlugin` so tests can
//! send preview events, step frames and inspect the resulting resources
//! without a window or renderer.

use bevy::app::App;
use bevy::prelude::*;

use placement::{Blueprint, MapSize, TileIndex};

use crate::backend::DrawQueue;
use crate::object_highlight::ObjectHighlight;
use crate::preview::{
    ActivePreview, BlueprintClipboard, CopyBlueprint, HighlightPlugin, RotateClipboard, SetPreview,
};
use crate::settings::HighlightSettings;

pub struct TestPreview {
    app: App,
}

impl TestPreview {
    /// A 256x256 map with default settings and no preview. Dirty tiles left
    /// over from startup are discarded.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(HighlightPlugin);
        app.update();
        let mut preview = Self { app };
        preview.take_dirty_tiles();
        preview
    }

    /// Swap in a new map size; takes effect on the next tick.
    pub fn set_map_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.app.insert_resource(MapSize::new(width, height));
        self
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub fn set_preview(&mut self, highlight: ObjectHighlight) -> &mut Self {
        self.app.world_mut().send_event(SetPreview(highlight));
        self
    }

    pub fn copy_blueprint(&mut self, blueprint: Blueprint) -> &mut Self {
        self.app.world_mut().send_event(CopyBlueprint(blueprint));
        self
    }

    pub fn rotate_clipboard(&mut self) -> &mut Self {
        self.app.world_mut().send_event(RotateClipboard);
        self
    }

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn active(&self) -> &ObjectHighlight {
        &self.app.world().resource::<ActivePreview>().highlight
    }

    pub fn clipboard(&self) -> &BlueprintClipboard {
        self.app.world().resource::<BlueprintClipboard>()
    }

    pub fn map(&self) -> &MapSize {
        self.app.world().resource::<MapSize>()
    }

    pub fn settings_mut(&mut self) -> Mut<'_, HighlightSettings> {
        self.app.world_mut().resource_mut::<HighlightSettings>()
    }

    pub fn take_dirty_tiles(&mut self) -> Vec<TileIndex> {
        self.app
            .world_mut()
            .resource_mut::<DrawQueue>()
            .take_dirty_tiles()
    }
}
