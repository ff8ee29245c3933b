//! Application wiring and the HTTP server loop.

use crate::di::{build_in_memory_module, build_mysql_module};
use crate::startup::print_startup_info;
use axum::Router;
use catalog_config::{AppConfig, StorageBackend};
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::{seed_default_types, DatabasePoolInterface, ProductTypeRepository};
use catalog_rest::{create_router, AppState};
use catalog_service::{CacheAdmin, CacheManager, ProductService, TypeResolver};
use shaku::{HasComponent, Module};
use std::future::Future;
use tokio::signal;
use tracing::{error, info};

/// Modules the server can run on.
pub trait CatalogModule:
    Module
    + HasComponent<dyn ProductService>
    + HasComponent<dyn TypeResolver>
    + HasComponent<dyn CacheAdmin>
    + HasComponent<dyn CacheManager>
    + HasComponent<dyn ProductTypeRepository>
{
}

impl<M> CatalogModule for M where
    M: Module
        + HasComponent<dyn ProductService>
        + HasComponent<dyn TypeResolver>
        + HasComponent<dyn CacheAdmin>
        + HasComponent<dyn CacheManager>
        + HasComponent<dyn ProductTypeRepository>
{
}

/// Builds the module for the configured backend and serves until shutdown.
pub async fn run(config: AppConfig) -> CatalogResult<()> {
    info!("Environment: {}", config.app.environment);
    info!("Storage backend: {}", config.storage.backend);

    match config.storage.backend {
        StorageBackend::Mysql => {
            let module = build_mysql_module(&config.database).await?;
            let pool: &dyn DatabasePoolInterface = module.resolve_ref();
            if config.database.run_migrations {
                pool.run_migrations().await?;
            }

            let router = build_router(module.as_ref(), &config);
            serve(router, &config, shutdown_signal()).await?;
            pool.close().await;
        }
        StorageBackend::Memory => {
            let module = build_in_memory_module();
            let store: &dyn ProductTypeRepository = module.resolve_ref();
            seed_default_types(store).await?;

            let router = build_router(module.as_ref(), &config);
            serve(router, &config, shutdown_signal()).await?;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Registers the configured cache regions and creates the router.
pub fn build_router<M: CatalogModule>(module: &M, config: &AppConfig) -> Router {
    preload_regions(module.resolve_ref(), &config.cache.preload_regions);
    create_router(
        AppState::from_module(module),
        &config.server,
        config.observability.request_logging,
    )
}

/// Registers regions up front so a reset before first use still lists them.
pub fn preload_regions(manager: &dyn CacheManager, names: &[String]) {
    for name in names {
        manager.cache(name);
    }
    info!("Cache regions registered: {}", manager.cache_names().join(", "));
}

async fn serve<F>(router: Router, config: &AppConfig, shutdown: F) -> CatalogResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| CatalogError::Internal(format!("REST server error: {}", e)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use catalog_service::ConcurrentMapCacheManager;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[test]
    fn test_preload_registers_regions() {
        let manager = ConcurrentMapCacheManager::new();
        preload_regions(&manager, &["product_types".to_string(), "product_type_by_code".to_string()]);
        assert_eq!(manager.cache_names(), vec!["product_type_by_code", "product_types"]);
    }

    #[tokio::test]
    async fn test_in_memory_router_lists_preloaded_regions() {
        let module = build_in_memory_module();
        let router = build_router(module.as_ref(), &AppConfig::default());

        let response = router
            .oneshot(Request::builder().uri("/cache").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("product_type_by_code"));
        assert!(text.contains("product_types"));
    }
}
