//! Game settings
//!
//! Persisted separately from game saves, under their own storage key.

use serde::{Deserialize, Serialize};

use crate::consts::{CELL_SIZE_PX, DEFAULT_MAX_ATTEMPTS, DRAG_COMMIT_THRESHOLD_PX};
use crate::persistence::{Storage, StorageError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side of one board cell in pointer pixels
    pub cell_size_px: f32,
    /// Movement along one axis needed before a drag locks to it
    pub drag_threshold_px: f32,
    /// Generator retry budget per new game
    pub max_generation_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size_px: CELL_SIZE_PX,
            drag_threshold_px: DRAG_COMMIT_THRESHOLD_PX,
            max_generation_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "rotaword_settings";

    /// Values the gesture controller and generator can work with
    pub fn is_usable(&self) -> bool {
        self.cell_size_px.is_finite()
            && self.cell_size_px > 0.0
            && self.drag_threshold_px.is_finite()
            && self.drag_threshold_px >= 0.0
            && self.max_generation_attempts > 0
    }

    /// Load settings, falling back to defaults when missing or unusable
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.read(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) if settings.is_usable() => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Ok(settings) => log::warn!("Ignoring unusable settings {:?}", settings),
                Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        storage.write(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
