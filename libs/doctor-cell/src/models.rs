use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub availability: Availability,
    pub location: String,
}

impl Doctor {
    pub fn is_available_on(&self, day: &str) -> bool {
        self.availability.days.iter().any(|d| d == day)
    }

    pub fn offers_slot(&self, time: &str) -> bool {
        self.availability.time_slots.iter().any(|t| t == time)
    }
}

/// Weekly availability of a doctor: weekday names and `HH:MM` slot start times.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub days: Vec<String>,
    pub time_slots: Vec<String>,
}

/// Criteria the doctor list is narrowed by. `None` and `Some("")` both match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoctorSearchFilters {
    pub specialty: Option<String>,
    pub day: Option<String>,
    pub time: Option<String>,
}

impl DoctorSearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_day(mut self, day: impl Into<String>) -> Self {
        self.day = Some(day.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn specialty(&self) -> Option<&str> {
        active(&self.specialty)
    }

    pub fn day(&self) -> Option<&str> {
        active(&self.day)
    }

    pub fn time(&self) -> Option<&str> {
        active(&self.time)
    }

    pub fn has_active_filters(&self) -> bool {
        self.specialty().is_some() || self.day().is_some() || self.time().is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        let matches_specialty = self.specialty().map_or(true, |s| doctor.specialty == s);
        let matches_day = self.day().map_or(true, |d| doctor.is_available_on(d));
        let matches_time = self.time().map_or(true, |t| doctor.offers_slot(t));

        matches_specialty && matches_day && matches_time
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

/// Filtered doctors plus the status line announced to assistive technology.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    pub doctors: Vec<&'a Doctor>,
    pub announcement: String,
}

impl FilterOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate doctor id in catalog: {0}")]
    DuplicateDoctorId(String),
}
