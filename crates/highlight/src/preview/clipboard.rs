//! `BlueprintClipboard` resource: the blueprint held for re-placement.

use std::sync::Arc;

use bevy::prelude::*;

use placement::Blueprint;

/// The copied blueprint, shared with any preview currently showing it.
#[derive(Resource, Debug, Clone, Default)]
pub struct BlueprintClipboard {
    blueprint: Option<Arc<Blueprint>>,
}

impl BlueprintClipboard {
    pub fn set(&mut self, blueprint: Blueprint) -> Arc<Blueprint> {
        let shared = Arc::new(blueprint);
        self.blueprint = Some(shared.clone());
        shared
    }

    pub fn get(&self) -> Option<&Arc<Blueprint>> {
        self.blueprint.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprint.is_none()
    }

    /// Replace the held blueprint with its quarter-turn and return it. The
    /// old blueprint is left intact for anyone still sharing it.
    pub fn rotate(&mut self) -> Option<Arc<Blueprint>> {
        let rotated = Arc::new(self.blueprint.as_ref()?.rotate());
        self.blueprint = Some(rotated.clone());
        Some(rotated)
    }
}
