//! Construction preview: the live `ObjectHighlight` state machine, the
//! floating sprites it emits, and the Bevy plugin that owns the active
//! preview and the blueprint clipboard.

pub mod backend;
pub mod detached;
pub mod object_highlight;
pub mod preview;
pub mod settings;

#[cfg(test)]
mod test_harness;

pub use backend::{DrawCommand, DrawContext, DrawQueue, HighlightBackend, TileInfo};
pub use detached::DetachedHighlight;
pub use object_highlight::{
    HighlightContext, HighlightGeometry, HighlightType, ObjectHighlight, SharedBlueprint, TrackRun,
};
pub use preview::{
    ActivePreview, BlueprintClipboard, CopyBlueprint, HighlightPlugin, RotateClipboard, SetPreview,
};
pub use settings::HighlightSettings;
