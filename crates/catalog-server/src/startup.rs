//! Server startup utilities.

use catalog_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r"
   ____      _        _
  / ___|__ _| |_ __ _| | ___   __ _
 | |   / _` | __/ _` | |/ _ \ / _` |
 | |__| (_| | || (_| | | (_) | (_| |
  \____\__,_|\__\__,_|_|\___/ \__, |
                              |___/
    "
    );
}

/// Prints the endpoints the server is about to expose.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Storage:   {}", config.storage.backend);
    info!("REST API:  http://{}", addr);
    info!("Health:    http://{}/health", addr);
    if config.server.swagger_enabled {
        info!("API Docs:  http://{}/swagger-ui", addr);
    }
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut config = AppConfig::default();
        print_startup_info(&config);
        config.server.swagger_enabled = false;
        print_startup_info(&config);
    }
}
