//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logging backend
//! - Seeds from wall-clock time
//! - Storage (LocalStorage on web, files natively)

use crate::persistence::Storage;

/// Environment variable naming the native save directory
pub const DATA_DIR_VAR: &str = "ROTAWORD_DATA_DIR";

/// Install the log backend. Safe to call more than once.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// LocalStorage, or memory when the browser refuses it
#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Box<dyn Storage> {
    match crate::persistence::LocalStorage::new() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}, progress will not be kept", e);
            Box::new(crate::persistence::MemoryStorage::new())
        }
    }
}

/// Files under `$ROTAWORD_DATA_DIR`, or the working directory
#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Box<dyn Storage> {
    let dir = std::env::var_os(DATA_DIR_VAR).unwrap_or_else(|| ".".into());
    Box::new(crate::persistence::FileStorage::new(dir))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_clock_seed_moves_forward() {
        let a = clock_seed();
        assert!(a > 1_600_000_000_000);
        assert!(clock_seed() >= a);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
    }
}
