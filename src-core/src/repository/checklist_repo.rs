//! Checklist Repository
//!
//! Persists checked state and selections per tent size on top of any
//! key/value storage. Failures never propagate: they are logged and the
//! caller receives the default value.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use crate::domain::{BallastType, ChecklistState, DomainResult, Selections, TentSize, Toggle};
use super::traits::KeyValueStorage;

pub const STORAGE_PREFIX: &str = "spark-checklist-";

/// Storage key for the checked state of `size`
pub fn state_key(size: TentSize) -> String {
    format!("{}{}", STORAGE_PREFIX, size)
}

pub fn ballast_key(size: TentSize) -> String {
    format!("{}ballast-{}", STORAGE_PREFIX, size)
}

pub fn walls_key(size: TentSize) -> String {
    format!("{}walls-{}", STORAGE_PREFIX, size)
}

pub fn lighting_key(size: TentSize) -> String {
    format!("{}lighting-{}", STORAGE_PREFIX, size)
}

#[derive(Clone)]
pub struct ChecklistRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl ChecklistRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    // ========================
    // Checked state
    // ========================

    pub fn load_state(&self, size: TentSize) -> ChecklistState {
        let key = state_key(size);
        match self.storage.get_item(&key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::error!("Error loading checklist state for {}: {}", size, e);
                ChecklistState::default()
            }),
            Ok(None) => ChecklistState::default(),
            Err(e) => {
                log::error!("Error loading checklist state for {}: {}", size, e);
                ChecklistState::default()
            }
        }
    }

    pub fn save_state(&self, size: TentSize, state: &ChecklistState) {
        let result: DomainResult<()> = serde_json::to_string(state)
            .map_err(Into::into)
            .and_then(|raw| self.storage.set_item(&state_key(size), &raw));
        if let Err(e) = result {
            log::error!("Error saving checklist state for {}: {}", size, e);
        }
    }

    pub fn clear_state(&self, size: TentSize) {
        self.remove(&state_key(size), "checklist state");
    }

    // ========================
    // Selection flags
    // ========================

    pub fn load_ballast_type(&self, size: TentSize) -> Option<BallastType> {
        self.load_flag(&ballast_key(size))
    }

    pub fn save_ballast_type(&self, size: TentSize, ballast: BallastType) {
        self.save_flag(&ballast_key(size), ballast);
    }

    pub fn clear_ballast_type(&self, size: TentSize) {
        self.remove(&ballast_key(size), "ballast type");
    }

    pub fn load_walls_option(&self, size: TentSize) -> Option<Toggle> {
        self.load_flag(&walls_key(size))
    }

    pub fn save_walls_option(&self, size: TentSize, option: Toggle) {
        self.save_flag(&walls_key(size), option);
    }

    pub fn clear_walls_option(&self, size: TentSize) {
        self.remove(&walls_key(size), "walls option");
    }

    pub fn load_lighting_option(&self, size: TentSize) -> Option<Toggle> {
        self.load_flag(&lighting_key(size))
    }

    pub fn save_lighting_option(&self, size: TentSize, option: Toggle) {
        self.save_flag(&lighting_key(size), option);
    }

    pub fn clear_lighting_option(&self, size: TentSize) {
        self.remove(&lighting_key(size), "lighting option");
    }

    pub fn load_selections(&self, size: TentSize) -> Selections {
        Selections::new(
            self.load_ballast_type(size),
            self.load_walls_option(size),
            self.load_lighting_option(size),
        )
    }

    /// Forget everything stored for `size`: checkmarks and all three flags
    pub fn reset(&self, size: TentSize) {
        self.clear_state(size);
        self.clear_ballast_type(size);
        self.clear_walls_option(size);
        self.clear_lighting_option(size);
        log::info!("Reset checklist for {}", size);
    }

    /// Sizes with any saved checkmarks, in catalog order
    pub fn sizes_with_saved_state(&self) -> Vec<TentSize> {
        let keys = match self.storage.keys_with_prefix(STORAGE_PREFIX) {
            Ok(keys) => keys,
            Err(e) => {
                log::error!("Error listing saved checklists: {}", e);
                return Vec::new();
            }
        };
        let mut sizes: Vec<TentSize> = keys
            .iter()
            .filter_map(|key| key.strip_prefix(STORAGE_PREFIX)?.parse().ok())
            .collect();
        sizes.sort();
        sizes
    }

    // ========================
    // Helpers
    // ========================

    fn load_flag<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.storage.get_item(key) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Ignoring stored value for {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::error!("Error loading {}: {}", key, e);
                None
            }
        }
    }

    fn save_flag<T: Display>(&self, key: &str, value: T) {
        if let Err(e) = self.storage.set_item(key, &value.to_string()) {
            log::error!("Error saving {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str, what: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            log::error!("Error clearing {} ({}): {}", what, key, e);
        }
    }
}
