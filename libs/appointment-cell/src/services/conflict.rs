//! Slot-conflict rules over an appointment list.
//!
//! A slot is identified by `(doctor_id, time)` only; the appointment date is
//! not part of the key, so a doctor's 09:00 slot is taken by any booking at
//! 09:00. Different doctors never conflict with each other.

use doctor_cell::Doctor;

use crate::models::{Appointment, SlotStatus};

pub fn is_slot_booked(appointments: &[Appointment], doctor_id: &str, time: &str) -> bool {
    appointments.iter().any(|a| a.occupies(doctor_id, time))
}

/// Times already booked for one doctor, in booking order
pub fn booked_times<'a>(appointments: &'a [Appointment], doctor_id: &str) -> Vec<&'a str> {
    appointments
        .iter()
        .filter(|a| a.doctor_id == doctor_id)
        .map(|a| a.time.as_str())
        .collect()
}

/// The doctor's slots in roster order, each flagged when already taken
pub fn slot_board(appointments: &[Appointment], doctor: &Doctor) -> Vec<SlotStatus> {
    let taken = booked_times(appointments, &doctor.id);

    doctor
        .availability
        .time_slots
        .iter()
        .map(|time| SlotStatus {
            time: time.clone(),
            booked: taken.contains(&time.as_str()),
        })
        .collect()
}
