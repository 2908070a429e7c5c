// libs/appointment-cell/src/services/store.rs
use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use shared_config::SlotPolicy;
use shared_database::{load_or_default, save, KeyValueStorage};

use crate::models::{Appointment, AppointmentError, BookingEvent, BookingState, NewAppointment};
use crate::services::conflict;
use crate::services::id::AppointmentIdGenerator;

pub const BOOKING_STORAGE_KEY: &str = "booking-storage";

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Owner of the persisted appointment list.
///
/// Every mutation is written through to storage before the call returns and
/// is then broadcast to subscribers. A failed write is logged and counted but
/// does not undo the in-memory change.
pub struct BookingStore {
    storage: Arc<dyn KeyValueStorage>,
    appointments: Vec<Appointment>,
    slot_policy: SlotPolicy,
    ids: AppointmentIdGenerator,
    events: broadcast::Sender<BookingEvent>,
    write_failures: u64,
}

impl BookingStore {
    /// Load the appointment list from storage, falling back to an empty list
    pub fn load(storage: Arc<dyn KeyValueStorage>, slot_policy: SlotPolicy) -> Self {
        let state: BookingState = load_or_default(storage.as_ref(), BOOKING_STORAGE_KEY);
        let appointments = dedupe_ids(state.appointments);
        let ids = AppointmentIdGenerator::resume_after(appointments.iter().map(|a| a.id.as_str()));
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!("Booking store loaded with {} appointments ({:?} slots)", appointments.len(), slot_policy);

        Self {
            storage,
            appointments,
            slot_policy,
            ids,
            events,
            write_failures: 0,
        }
    }

    /// Create, persist and return a new appointment
    pub fn add_appointment(&mut self, request: NewAppointment) -> Result<Appointment, AppointmentError> {
        debug!("Adding appointment for doctor {} at {}", request.doctor_id, request.time);

        if request.time.trim().is_empty() {
            return Err(AppointmentError::ValidationError(
                "a time slot must be selected".to_string(),
            ));
        }

        if self.is_slot_booked(&request.doctor_id, &request.time) {
            match self.slot_policy {
                SlotPolicy::Exclusive => {
                    warn!("Rejected double booking of doctor {} at {}", request.doctor_id, request.time);
                    return Err(AppointmentError::SlotNotAvailable {
                        doctor_id: request.doctor_id,
                        time: request.time,
                    });
                }
                SlotPolicy::Permissive => {
                    warn!("Accepting duplicate booking of doctor {} at {}", request.doctor_id, request.time);
                }
            }
        }

        let existing = &self.appointments;
        let id = self.ids.next_id(|candidate| existing.iter().any(|a| a.id == candidate));
        let appointment = Appointment::from_request(id, request);

        self.appointments.push(appointment.clone());
        self.persist();
        self.notify(BookingEvent::Added(appointment.clone()));

        debug!("Appointment {} created", appointment.id);
        Ok(appointment)
    }

    /// Remove an appointment. Unknown ids are a no-op and return `None`.
    pub fn remove_appointment(&mut self, id: &str) -> Option<Appointment> {
        debug!("Removing appointment {}", id);

        let position = match self.appointments.iter().position(|a| a.id == id) {
            Some(position) => position,
            None => {
                debug!("Appointment {} not found, nothing to remove", id);
                return None;
            }
        };

        let removed = self.appointments.remove(position);
        self.persist();
        self.notify(BookingEvent::Removed(removed.clone()));

        Some(removed)
    }

    pub fn is_slot_booked(&self, doctor_id: &str, time: &str) -> bool {
        conflict::is_slot_booked(&self.appointments, doctor_id, time)
    }

    /// Appointments in insertion order
    pub fn list(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn slot_policy(&self) -> SlotPolicy {
        self.slot_policy
    }

    /// Status line for the appointment list
    pub fn summary(&self) -> String {
        match self.appointments.len() {
            0 => "No appointments booked yet.".to_string(),
            1 => "You have 1 appointment".to_string(),
            n => format!("You have {} appointments", n),
        }
    }

    /// Receive every change made after this call.
    ///
    /// A receiver that falls more than the channel capacity behind gets
    /// `RecvError::Lagged` and should re-read [`BookingStore::list`].
    pub fn subscribe(&self) -> broadcast::Receiver<BookingEvent> {
        self.events.subscribe()
    }

    /// Number of writes that failed since the store was loaded
    pub fn write_failures(&self) -> u64 {
        self.write_failures
    }

    fn persist(&mut self) {
        let state = BookingState {
            appointments: self.appointments.clone(),
        };

        if let Err(e) = save(self.storage.as_ref(), BOOKING_STORAGE_KEY, &state) {
            self.write_failures += 1;
            error!("Failed to persist appointments: {}", e);
        }
    }

    fn notify(&self, event: BookingEvent) {
        if self.events.send(event).is_err() {
            debug!("No booking subscribers to notify");
        }
    }
}

fn dedupe_ids(appointments: Vec<Appointment>) -> Vec<Appointment> {
    let mut seen = HashSet::new();
    let before = appointments.len();

    let unique: Vec<Appointment> = appointments
        .into_iter()
        .filter(|a| seen.insert(a.id.clone()))
        .collect();

    if unique.len() != before {
        warn!("Dropped {} persisted appointments with duplicate ids", before - unique.len());
    }

    unique
}
