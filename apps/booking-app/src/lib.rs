pub mod context;
pub mod telemetry;

pub use context::AppContext;
