//! Cache administration controller.

use crate::{
    responses::{ok, AppError, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use catalog_service::CacheRegionSummary;
use tracing::debug;

/// Creates the cache router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cache", get(list_regions))
        .route("/cache/:command", get(run_command).post(run_command))
}

/// List registered cache regions.
#[utoipa::path(
    get,
    path = "/cache",
    tag = "cache",
    responses(
        (status = 200, description = "Registered regions", body = Vec<CacheRegionSummary>)
    )
)]
pub async fn list_regions(State(state): State<AppState>) -> ApiResult<Vec<CacheRegionSummary>> {
    ok(state.cache_admin.regions())
}

/// Run a cache command. `RESET` clears every region.
#[utoipa::path(
    post,
    path = "/cache/{command}",
    tag = "cache",
    params(("command" = String, Path, description = "Command keyword")),
    responses(
        (status = 200, description = "Command executed", body = String, content_type = "text/plain"),
        (status = 400, description = "UNKNOWN COMMAND", body = String, content_type = "text/plain")
    )
)]
pub async fn run_command(
    State(state): State<AppState>,
    Path(command): Path<String>,
) -> Result<&'static str, AppError> {
    debug!("Cache command request: {}", command);

    Ok(state.cache_admin.handle_command(&command)?)
}
