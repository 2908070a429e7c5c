pub mod availability;
pub mod catalog;
pub mod roster;

pub use availability::AvailabilityFilter;
pub use catalog::Catalog;
