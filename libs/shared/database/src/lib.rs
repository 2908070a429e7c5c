pub mod persisted;
pub mod storage;

pub use persisted::{load_or_default, save};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
