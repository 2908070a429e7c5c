use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_STORAGE_DIR: &str = ".booking-storage";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// How the booking store treats a second booking of the same doctor's time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPolicy {
    /// A `(doctor, time)` pair can hold at most one appointment.
    #[default]
    Exclusive,
    /// Duplicates are accepted; callers are expected to check `is_slot_booked` first.
    Permissive,
}

impl FromStr for SlotPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclusive" => Ok(SlotPolicy::Exclusive),
            "permissive" => Ok(SlotPolicy::Permissive),
            other => Err(format!("unknown slot policy: {}", other)),
        }
    }
}

/// Log filter from `BOOKING_LOG`. Readable before tracing is installed.
pub fn log_filter_from_env() -> String {
    env::var("BOOKING_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_dir: PathBuf,
    pub slot_policy: SlotPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            slot_policy: SlotPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            storage_dir: env::var("BOOKING_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("BOOKING_STORAGE_DIR not set, using {}", DEFAULT_STORAGE_DIR);
                    PathBuf::from(DEFAULT_STORAGE_DIR)
                }),
            slot_policy: match env::var("BOOKING_SLOT_POLICY") {
                Ok(raw) => raw.parse().unwrap_or_else(|e| {
                    warn!("{}, falling back to exclusive", e);
                    SlotPolicy::Exclusive
                }),
                Err(_) => SlotPolicy::default(),
            },
        };

        if !config.is_configured() {
            warn!("Storage directory is empty - persisted state will land in the working directory");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.storage_dir.as_os_str().is_empty()
    }
}
