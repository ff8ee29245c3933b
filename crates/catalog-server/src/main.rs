//! # Product Catalog Server
//!
//! Main entry point. Loads configuration, initialises logging, and serves
//! the REST API over the configured storage backend.

use catalog_config::{ConfigLoader, ObservabilityConfig};
use catalog_server::{app, startup::print_banner};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    print_banner();
    info!("Starting {} {}", config.app.name, config.app.version);

    if let Err(e) = app::run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(observability: &ObservabilityConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},catalog=debug,tower_http=debug",
            observability.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if observability.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}
