//! Fixtures shared by the cells' integration tests.

use std::path::PathBuf;
use std::sync::Once;

use tempfile::TempDir;

use doctor_cell::{Availability, Catalog, Doctor};
use shared_config::{AppConfig, SlotPolicy};
use shared_database::FileStorage;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness' captured writer.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

pub struct TestDoctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub days: Vec<String>,
    pub time_slots: Vec<String>,
    pub location: String,
}

impl TestDoctor {
    pub fn new(id: &str, specialty: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            specialty: specialty.to_string(),
            days: Vec::new(),
            time_slots: Vec::new(),
            location: format!("{} Clinic", specialty),
        }
    }

    pub fn days(mut self, days: &[&str]) -> Self {
        self.days = days.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn slots(mut self, slots: &[&str]) -> Self {
        self.time_slots = slots.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn to_doctor(&self) -> Doctor {
        Doctor {
            id: self.id.clone(),
            name: self.name.clone(),
            specialty: self.specialty.clone(),
            rating: 4.5,
            availability: Availability {
                days: self.days.clone(),
                time_slots: self.time_slots.clone(),
            },
            location: self.location.clone(),
        }
    }
}

/// Dr. A (Cardiology, Mon/Wed, 09:00/10:00) and Dr. B (Pediatrics, Tue, 09:00).
pub fn scenario_catalog() -> Catalog {
    let doctors = vec![
        TestDoctor::new("A", "Cardiology")
            .days(&["Mon", "Wed"])
            .slots(&["09:00", "10:00"])
            .to_doctor(),
        TestDoctor::new("B", "Pediatrics")
            .days(&["Tue"])
            .slots(&["09:00"])
            .to_doctor(),
    ];

    Catalog::new(doctors).expect("scenario catalog has unique ids")
}

/// A throwaway directory-backed storage that is removed on drop.
pub struct TestStorage {
    dir: TempDir,
}

impl TestStorage {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn open(&self) -> FileStorage {
        FileStorage::open(self.dir.path()).expect("Failed to open test storage")
    }

    pub fn config(&self, slot_policy: SlotPolicy) -> AppConfig {
        AppConfig {
            storage_dir: self.path(),
            slot_policy,
        }
    }
}

impl Default for TestStorage {
    fn default() -> Self {
        Self::new()
    }
}
