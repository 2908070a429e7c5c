pub mod theme;

pub use theme::{PreferenceStore, THEME_STORAGE_KEY};
