use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::models::{CatalogError, Doctor};
use crate::services::roster::default_doctors;

/// Read-only doctor roster, fixed at construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    doctors: Vec<Doctor>,
}

impl Catalog {
    /// Build a catalog, rejecting rosters that reuse a doctor id
    pub fn new(doctors: Vec<Doctor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(doctors.len());
        for doctor in &doctors {
            if !seen.insert(doctor.id.as_str()) {
                return Err(CatalogError::DuplicateDoctorId(doctor.id.clone()));
            }
        }

        debug!("Catalog built with {} doctors", doctors.len());
        Ok(Self { doctors })
    }

    /// The roster the application ships with
    pub fn default_roster() -> Self {
        Self {
            doctors: default_doctors(),
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn get(&self, doctor_id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == doctor_id)
    }

    /// Distinct specialties in order of first appearance
    pub fn specialties(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.doctors
            .iter()
            .map(|d| d.specialty.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Union of every doctor's working days, sorted lexicographically
    pub fn available_days(&self) -> Vec<&str> {
        self.doctors
            .iter()
            .flat_map(|d| d.availability.days.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Union of every doctor's slots. Zero-padded `HH:MM` sorts chronologically.
    pub fn available_times(&self) -> Vec<&str> {
        self.doctors
            .iter()
            .flat_map(|d| d.availability.time_slots.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_roster()
    }
}
