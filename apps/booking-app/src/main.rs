use anyhow::Result;
use dotenv::dotenv;
use tracing::info;

use booking_app::{telemetry, AppContext};
use shared_config::AppConfig;

fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing before config so its fallback warnings are visible
    telemetry::init_tracing(&shared_config::log_filter_from_env());

    info!("Starting doctor booking core");

    // Load configuration
    let config = AppConfig::from_env();

    let context = AppContext::from_config(&config)?;

    info!(
        "Storage at {} - {} doctors, {} specialties",
        config.storage_dir.display(),
        context.catalog().len(),
        context.catalog().specialties().len()
    );
    info!("{}", context.appointment_summary());

    let preferences = context.preferences();
    info!(
        "Theme: dark={} font={} ({}px) contrast={}",
        preferences.is_dark_mode,
        preferences.font_size,
        preferences.font_size.root_px(),
        preferences.high_contrast
    );

    Ok(())
}
