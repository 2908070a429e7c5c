// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use doctor_cell::{Catalog, Doctor};

use crate::models::{Appointment, AppointmentError, NewAppointment, SlotStatus};
use crate::services::conflict;
use crate::services::store::BookingStore;

pub const APPOINTMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Books catalog doctors into the booking store.
///
/// This is where the cross-entity rule lives: the requested time has to be
/// one of the doctor's slots. Doctor name, specialty and location are copied
/// from the catalog so the appointment stays readable if the roster changes.
pub struct BookingService {
    catalog: Arc<Catalog>,
}

impl BookingService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Book `doctor_id` at `time`, on `date` or today (UTC) when absent
    pub fn book(
        &self,
        store: &mut BookingStore,
        doctor_id: &str,
        time: &str,
        date: Option<NaiveDate>,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Booking doctor {} at {}", doctor_id, time);

        let doctor = self.offering_doctor(doctor_id, time)?;
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let appointment = store.add_appointment(NewAppointment {
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
            date: date.format(APPOINTMENT_DATE_FORMAT).to_string(),
            time: time.to_string(),
            location: doctor.location.clone(),
        })?;

        info!(
            "Booked {} with {} on {} at {}",
            appointment.id, appointment.doctor_name, appointment.date, appointment.time
        );
        Ok(appointment)
    }

    /// Insert a caller-assembled request once its doctor and slot check out
    pub fn add_appointment(
        &self,
        store: &mut BookingStore,
        request: NewAppointment,
    ) -> Result<Appointment, AppointmentError> {
        self.offering_doctor(&request.doctor_id, &request.time)?;
        store.add_appointment(request)
    }

    /// Slots of one doctor with their booked state
    pub fn slot_board(
        &self,
        store: &BookingStore,
        doctor_id: &str,
    ) -> Result<Vec<SlotStatus>, AppointmentError> {
        let doctor = self
            .catalog
            .get(doctor_id)
            .ok_or_else(|| AppointmentError::DoctorNotFound(doctor_id.to_string()))?;

        Ok(Self::slot_board_for(store, doctor))
    }

    pub fn slot_board_for(store: &BookingStore, doctor: &Doctor) -> Vec<SlotStatus> {
        conflict::slot_board(store.list(), doctor)
    }

    fn offering_doctor(&self, doctor_id: &str, time: &str) -> Result<&Doctor, AppointmentError> {
        let doctor = self
            .catalog
            .get(doctor_id)
            .ok_or_else(|| AppointmentError::DoctorNotFound(doctor_id.to_string()))?;

        if !doctor.offers_slot(time) {
            return Err(AppointmentError::InvalidTime(format!(
                "{} does not offer a {:?} slot",
                doctor.name, time
            )));
        }

        Ok(doctor)
    }
}
