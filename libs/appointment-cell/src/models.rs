use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM, one of the doctor's slots
    pub location: String,
}

impl Appointment {
    pub fn from_request(id: String, request: NewAppointment) -> Self {
        Self {
            id,
            doctor_id: request.doctor_id,
            doctor_name: request.doctor_name,
            specialty: request.specialty,
            date: request.date,
            time: request.time,
            location: request.location,
        }
    }

    /// Parsed calendar date, `None` when the stored string is not `YYYY-MM-DD`
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn occupies(&self, doctor_id: &str, time: &str) -> bool {
        self.doctor_id == doctor_id && self.time == time
    }
}

/// Everything an appointment carries except its id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub doctor_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

/// Persisted shape of the booking store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookingState {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// A doctor's slot as the booking dialog shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub time: String,
    pub booked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    Added(Appointment),
    Removed(Appointment),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Appointment slot {time} already booked for doctor {doctor_id}")]
    SlotNotAvailable { doctor_id: String, time: String },

    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("Invalid appointment time: {0}")]
    InvalidTime(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
