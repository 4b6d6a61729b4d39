mod app;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    info!("=== Game Over Flow Startup ===");

    match app::build_app() {
        Ok(wiring) => app::run_demo(wiring),
        Err(err) => {
            error!(error = %err, "startup_failed");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
