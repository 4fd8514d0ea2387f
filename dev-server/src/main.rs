//! Development server for admin UI development
//!
//! Starts the mock API on a fixed port, logs in as the admin and fills the
//! store with locations, spaces, leads and dashboard figures so every page
//! of the UI has something to show.
//!
//! Usage: cargo run -p dev-server
//!
//! The port is read from PORT and defaults to 8091, which is where the UI
//! looks for the API when BACKEND_URL is not set.

use anyhow::{Context, Result};
use mock_api::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, telemetry};
use test_helpers::mock::DevDataset;
use tracing::info;

const DEFAULT_PORT: u16 = 8091;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse().context("PORT is not a valid port number")?,
        Err(_) => DEFAULT_PORT,
    };

    info!("🚀 Starting coworking admin development server");
    let app = test_helpers::spawn_app_on_port(port).await?;
    info!("✅ API server running on {}", app.address());

    info!("📊 Setting up development test data...");
    app.login_admin().await?;
    let dataset = DevDataset::create(&app).await?;
    app.store.clear_requests();

    info!("🎯 Development server ready!");
    info!("   API: {}/api/v1", app.address());
    info!("   UI:  cd ui && BACKEND_URL={} trunk serve", app.address());
    info!("   Login: {DEFAULT_ADMIN_EMAIL} / {DEFAULT_ADMIN_PASSWORD}");
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
