//! Preview events, systems, and Bevy plugin registration.

use std::sync::Arc;

use bevy::prelude::*;

use placement::layouts::LayoutTables;
use placement::{Blueprint, MapSize, PlacementPlugin};

use crate::backend::DrawQueue;
use crate::object_highlight::{HighlightContext, ObjectHighlight};
use crate::settings::HighlightSettings;

use super::clipboard::BlueprintClipboard;

// =============================================================================
// Resources
// =============================================================================

/// The preview currently shown under the cursor.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActivePreview {
    pub highlight: ObjectHighlight,
}

// =============================================================================
// Events
// =============================================================================

/// Event to replace the active preview. Only the last request of a frame
/// takes effect.
#[derive(Event, Debug, Clone)]
pub struct SetPreview(pub ObjectHighlight);

/// Event to put a captured blueprint on the clipboard.
#[derive(Event, Debug, Clone)]
pub struct CopyBlueprint(pub Blueprint);

/// Event to turn the clipboard blueprint a quarter.
#[derive(Event, Debug, Clone, Copy)]
pub struct RotateClipboard;

// =============================================================================
// Systems
// =============================================================================

/// Swap `next` in when its geometry differs, scheduling both the old and the
/// new footprint for redraw.
fn replace_preview(
    active: &mut ActivePreview,
    next: ObjectHighlight,
    ctx: &HighlightContext,
    queue: &mut DrawQueue,
) -> bool {
    if active.highlight == next {
        return false;
    }
    active.highlight.mark_dirty(ctx, &mut *queue);
    active.highlight = next;
    active.highlight.mark_dirty(ctx, &mut *queue);
    true
}

fn store_copied_blueprint(
    mut events: EventReader<CopyBlueprint>,
    mut clipboard: ResMut<BlueprintClipboard>,
) {
    for ev in events.read() {
        let shared = clipboard.set(ev.0.clone());
        info!(
            "Blueprint copied to clipboard: {} item(s) from {} tile(s)",
            shared.len(),
            shared.source_tiles().len()
        );
    }
}

/// System that processes `RotateClipboard` events. A preview showing the
/// clipboard blueprint follows the rotation at the same anchor.
fn rotate_clipboard(
    mut events: EventReader<RotateClipboard>,
    mut clipboard: ResMut<BlueprintClipboard>,
    mut active: ResMut<ActivePreview>,
    mut queue: ResMut<DrawQueue>,
    map: Res<MapSize>,
    layouts: Res<LayoutTables>,
    settings: Res<HighlightSettings>,
) {
    let ctx = HighlightContext::new(&map, &layouts, &settings);
    for _ in events.read() {
        let Some(previous) = clipboard.get().cloned() else {
            debug!("RotateClipboard: clipboard is empty");
            continue;
        };
        let Some(rotated) = clipboard.rotate() else {
            continue;
        };
        info!("Clipboard blueprint rotated ({} item(s))", rotated.len());

        let anchor = match active.highlight.blueprint() {
            Some((tile, shown)) if Arc::ptr_eq(shown, &previous) => tile,
            _ => continue,
        };
        replace_preview(
            &mut active,
            ObjectHighlight::make_blueprint(anchor, rotated),
            &ctx,
            &mut queue,
        );
    }
}

/// System that processes `SetPreview` events.
fn apply_preview_requests(
    mut events: EventReader<SetPreview>,
    mut active: ResMut<ActivePreview>,
    mut queue: ResMut<DrawQueue>,
    map: Res<MapSize>,
    layouts: Res<LayoutTables>,
    settings: Res<HighlightSettings>,
) {
    let Some(SetPreview(next)) = events.read().last() else {
        return;
    };
    let ctx = HighlightContext::new(&map, &layouts, &settings);
    if replace_preview(&mut active, next.clone(), &ctx, &mut queue) {
        debug!("Preview set to {:?}", active.highlight.highlight_type());
    }
}

/// Rebuild a stale preview so draw systems later in the frame read a
/// complete cache. Changes to the map, layouts or settings invalidate it.
fn refresh_preview_cache(
    mut active: ResMut<ActivePreview>,
    mut queue: ResMut<DrawQueue>,
    map: Res<MapSize>,
    layouts: Res<LayoutTables>,
    settings: Res<HighlightSettings>,
) {
    let ctx = HighlightContext::new(&map, &layouts, &settings);
    if map.is_changed() || layouts.is_changed() || settings.is_changed() {
        active.highlight.mark_dirty(&ctx, &mut *queue);
        active.highlight.invalidate();
    }
    if !active.highlight.is_stale() {
        return;
    }
    active.highlight.update_tiles(&ctx);
    active.highlight.mark_dirty(&ctx, &mut *queue);
}

// =============================================================================
// Plugin
// =============================================================================

pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<PlacementPlugin>() {
            app.add_plugins(PlacementPlugin);
        }
        app.init_resource::<HighlightSettings>()
            .init_resource::<ActivePreview>()
            .init_resource::<BlueprintClipboard>()
            .init_resource::<DrawQueue>()
            .add_event::<SetPreview>()
            .add_event::<CopyBlueprint>()
            .add_event::<RotateClipboard>()
            .add_systems(
                Update,
                (
                    store_copied_blueprint,
                    rotate_clipboard,
                    apply_preview_requests,
                    refresh_preview_cache,
                )
                    .chain(),
            );
    }
}
