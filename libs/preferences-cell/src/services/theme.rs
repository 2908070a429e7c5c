use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, error, info};

use shared_database::{load_or_default, save, KeyValueStorage};

use crate::models::{FontSize, PreferenceEvent, Preferences};

pub const THEME_STORAGE_KEY: &str = "theme-storage";

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Persisted display settings, independent of bookings and the catalog.
pub struct PreferenceStore {
    storage: Arc<dyn KeyValueStorage>,
    preferences: Preferences,
    events: broadcast::Sender<PreferenceEvent>,
    write_failures: u64,
}

impl PreferenceStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let preferences: Preferences = load_or_default(storage.as_ref(), THEME_STORAGE_KEY);
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!(
            "Preferences loaded: dark={} font={} contrast={}",
            preferences.is_dark_mode, preferences.font_size, preferences.high_contrast
        );

        Self {
            storage,
            preferences,
            events,
            write_failures: 0,
        }
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn is_dark_mode(&self) -> bool {
        self.preferences.is_dark_mode
    }

    pub fn font_size(&self) -> FontSize {
        self.preferences.font_size
    }

    pub fn high_contrast(&self) -> bool {
        self.preferences.high_contrast
    }

    /// Flip dark mode and return the new value
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.preferences.is_dark_mode = !self.preferences.is_dark_mode;
        debug!("Dark mode now {}", self.preferences.is_dark_mode);
        self.commit();
        self.preferences.is_dark_mode
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        if self.preferences.font_size == size {
            debug!("Font size already {}", size);
            return;
        }

        self.preferences.font_size = size;
        debug!("Font size now {}", size);
        self.commit();
    }

    /// Flip high contrast and return the new value
    pub fn toggle_high_contrast(&mut self) -> bool {
        self.preferences.high_contrast = !self.preferences.high_contrast;
        debug!("High contrast now {}", self.preferences.high_contrast);
        self.commit();
        self.preferences.high_contrast
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PreferenceEvent> {
        self.events.subscribe()
    }

    pub fn write_failures(&self) -> u64 {
        self.write_failures
    }

    fn commit(&mut self) {
        if let Err(e) = save(self.storage.as_ref(), THEME_STORAGE_KEY, &self.preferences) {
            self.write_failures += 1;
            error!("Failed to persist preferences: {}", e);
        }

        if self.events.send(PreferenceEvent::Changed(self.preferences)).is_err() {
            debug!("No preference subscribers to notify");
        }
    }
}
