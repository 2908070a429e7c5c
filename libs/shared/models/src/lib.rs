pub mod error;

pub use error::StorageError;
