use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tokio::sync::broadcast;
use tracing::{debug, info};

use appointment_cell::{
    Appointment, AppointmentError, BookingEvent, BookingService, BookingStore, NewAppointment,
    SlotStatus,
};
use doctor_cell::services::availability::FILTERS_CLEARED_ANNOUNCEMENT;
use doctor_cell::{AvailabilityFilter, Catalog, DoctorSearchFilters, FilterOutcome};
use preferences_cell::{FontSize, PreferenceEvent, PreferenceStore, Preferences};
use shared_config::AppConfig;
use shared_database::{FileStorage, KeyValueStorage};

/// Everything the presentation layer talks to, owned in one place.
///
/// Both stores share one storage backend but keep separate keys and never
/// touch each other's state.
pub struct AppContext {
    catalog: Arc<Catalog>,
    booking: BookingService,
    bookings: BookingStore,
    preferences: PreferenceStore,
}

impl AppContext {
    pub fn new(config: &AppConfig, storage: Arc<dyn KeyValueStorage>, catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let bookings = BookingStore::load(Arc::clone(&storage), config.slot_policy);
        let preferences = PreferenceStore::load(storage);

        info!(
            "Application context ready: {} doctors, {} appointments",
            catalog.len(),
            bookings.len()
        );

        Self {
            booking: BookingService::new(Arc::clone(&catalog)),
            catalog,
            bookings,
            preferences,
        }
    }

    /// Open the file-backed store from configuration with the built-in roster
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let storage = FileStorage::open(&config.storage_dir).with_context(|| {
            format!("failed to open storage at {}", config.storage_dir.display())
        })?;

        Ok(Self::new(config, Arc::new(storage), Catalog::default_roster()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // --- Doctors -------------------------------------------------------------

    pub fn filter(&self, filters: &DoctorSearchFilters) -> FilterOutcome<'_> {
        AvailabilityFilter::apply(&self.catalog, filters)
    }

    pub fn clear_filters(&self, filters: &mut DoctorSearchFilters) -> &'static str {
        filters.clear();
        FILTERS_CLEARED_ANNOUNCEMENT
    }

    // --- Appointments --------------------------------------------------------

    pub fn book(&mut self, doctor_id: &str, time: &str) -> Result<Appointment, AppointmentError> {
        self.booking.book(&mut self.bookings, doctor_id, time, None)
    }

    pub fn book_on(
        &mut self,
        doctor_id: &str,
        time: &str,
        date: NaiveDate,
    ) -> Result<Appointment, AppointmentError> {
        self.booking.book(&mut self.bookings, doctor_id, time, Some(date))
    }

    /// Insert a record the caller assembled; the doctor must exist and offer the time
    pub fn add_appointment(&mut self, request: NewAppointment) -> Result<Appointment, AppointmentError> {
        self.booking.add_appointment(&mut self.bookings, request)
    }

    pub fn cancel(&mut self, appointment_id: &str) -> Option<Appointment> {
        debug!("Cancel requested for {}", appointment_id);
        self.bookings.remove_appointment(appointment_id)
    }

    pub fn is_slot_booked(&self, doctor_id: &str, time: &str) -> bool {
        self.bookings.is_slot_booked(doctor_id, time)
    }

    pub fn slot_board(&self, doctor_id: &str) -> Result<Vec<SlotStatus>, AppointmentError> {
        self.booking.slot_board(&self.bookings, doctor_id)
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.bookings.list()
    }

    pub fn appointment_summary(&self) -> String {
        self.bookings.summary()
    }

    pub fn subscribe_bookings(&self) -> broadcast::Receiver<BookingEvent> {
        self.bookings.subscribe()
    }

    // --- Preferences ---------------------------------------------------------

    pub fn preferences(&self) -> Preferences {
        self.preferences.preferences()
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.preferences.toggle_dark_mode()
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.preferences.set_font_size(size)
    }

    pub fn toggle_high_contrast(&mut self) -> bool {
        self.preferences.toggle_high_contrast()
    }

    pub fn subscribe_preferences(&self) -> broadcast::Receiver<PreferenceEvent> {
        self.preferences.subscribe()
    }

    /// Failed writes across both stores; persistence is best-effort
    pub fn write_failures(&self) -> u64 {
        self.bookings.write_failures() + self.preferences.write_failures()
    }
}
