pub mod booking;
pub mod conflict;
pub mod id;
pub mod store;

pub use booking::BookingService;
pub use id::AppointmentIdGenerator;
pub use store::{BookingStore, BOOKING_STORAGE_KEY};
