//! In-engine ownership of the active preview and the blueprint clipboard.
//!
//! Input systems describe what the player is about to build by sending
//! `SetPreview`; the plugin swaps the preview in, keeps its cache fresh, and
//! reports the tiles that need repainting through `DrawQueue`.

mod clipboard;
mod plugin;

#[cfg(test)]
mod tests;

pub use clipboard::BlueprintClipboard;
pub use plugin::{ActivePreview, CopyBlueprint, HighlightPlugin, RotateClipboard, SetPreview};
