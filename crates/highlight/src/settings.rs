//! Player-facing preview settings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use placement::config::PALETTE_TINT_WHITE;
use placement::types::PaletteId;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    /// Tint applied to every tile overlay of the active preview.
    pub palette: PaletteId,
    /// Show the track or road stub a depot build will try to connect.
    pub show_depot_connection: bool,
    /// Float a sign sprite over each station of a blueprint preview.
    pub show_station_labels: bool,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            palette: PALETTE_TINT_WHITE,
            show_depot_connection: true,
            show_station_labels: true,
        }
    }
}

impl HighlightSettings {
    /// Parse settings from JSON, falling back to defaults on malformed input.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(
                    "HighlightSettings: failed to parse {} bytes, falling back to default: {}",
                    json.len(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
