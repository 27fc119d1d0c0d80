//! Game settings and preferences
//!
//! Persisted separately from the best score.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TICK_MS, MIN_TICK_MS, SETTINGS_KEY};
use crate::platform::{KeyValueStore, StorageError};

/// Speed level presets offered by the level buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedLevel {
    Slow,
    #[default]
    Normal,
    Fast,
    Insane,
}

impl SpeedLevel {
    pub const ALL: [SpeedLevel; 4] = [
        SpeedLevel::Slow,
        SpeedLevel::Normal,
        SpeedLevel::Fast,
        SpeedLevel::Insane,
    ];

    /// Button label
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedLevel::Slow => "Slow",
            SpeedLevel::Normal => "Normal",
            SpeedLevel::Fast => "Fast",
            SpeedLevel::Insane => "Insane",
        }
    }

    /// Milliseconds between ticks
    pub fn tick_ms(&self) -> u32 {
        match self {
            SpeedLevel::Slow => 150,
            SpeedLevel::Normal => DEFAULT_TICK_MS,
            SpeedLevel::Fast => 60,
            SpeedLevel::Insane => 40,
        }
    }

    /// Preset with exactly this period, if any
    pub fn from_tick_ms(tick_ms: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.tick_ms() == tick_ms)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between ticks; need not match a preset
    pub tick_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Settings {
    /// Preset matching the current period
    pub fn level(&self) -> Option<SpeedLevel> {
        SpeedLevel::from_tick_ms(self.tick_ms)
    }

    /// Set the tick period, clamped to the supported minimum
    pub fn set_tick_ms(&mut self, tick_ms: u32) {
        self.tick_ms = tick_ms.max(MIN_TICK_MS);
    }

    /// Load settings, falling back to defaults when missing or unreadable
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get_item(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(mut settings) => {
                    settings.set_tick_ms(settings.tick_ms);
                    log::info!("Loaded settings ({} ms per tick)", settings.tick_ms);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        store.set_item(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
