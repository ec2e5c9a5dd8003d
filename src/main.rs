//! Shopfront - Main Entry Point
//!
//! Storefront desktop app: one navbar, four product cards.

use shopfront::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Shopfront...");

    // Run the GPUI application
    run_app();
}
