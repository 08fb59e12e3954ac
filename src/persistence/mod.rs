//! Save/load persistence
//!
//! Features:
//! - Versioned JSON envelope
//! - Consistency check on load (puzzle intersections, board letters)
//! - Corrupt or foreign saves are treated as absent

pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, Storage, StorageError};

use serde::{Deserialize, Serialize};

use crate::sim::GameSession;

/// Storage key for the current game
pub const SAVE_KEY: &str = "rotaword_save";

/// Bumped whenever the session layout changes
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveEnvelope {
    pub version: u32,
    pub session: GameSession,
}

/// Just enough of an envelope to tell versions apart before parsing the rest
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

pub fn save_session(storage: &mut dyn Storage, session: &GameSession) -> Result<(), StorageError> {
    let envelope = SaveEnvelope {
        version: SAVE_VERSION,
        session: session.clone(),
    };
    let json = serde_json::to_string(&envelope)?;
    storage.write(SAVE_KEY, &json)?;
    log::info!("Game saved (seed {})", session.seed());
    Ok(())
}

/// The saved session, if there is one and it is sound
pub fn load_session(storage: &dyn Storage) -> Option<GameSession> {
    let json = match storage.read(SAVE_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("Could not read save: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<VersionProbe>(&json) {
        Ok(probe) if probe.version == SAVE_VERSION => {}
        Ok(probe) => {
            log::warn!("Ignoring save with unknown version {}", probe.version);
            return None;
        }
        Err(e) => {
            log::warn!("Ignoring corrupt save: {}", e);
            return None;
        }
    }

    let envelope: SaveEnvelope = match serde_json::from_str(&json) {
        Ok(envelope) => envelope,
        Err(e) => {
            log::warn!("Ignoring corrupt save: {}", e);
            return None;
        }
    };

    if !envelope.session.is_consistent() {
        log::warn!("Ignoring save whose board does not match its puzzle");
        return None;
    }

    log::info!("Loaded saved game (seed {})", envelope.session.seed());
    Some(envelope.session)
}

pub fn clear_session(storage: &mut dyn Storage) -> Result<(), StorageError> {
    storage.remove(SAVE_KEY)?;
    log::info!("Saved game cleared");
    Ok(())
}
