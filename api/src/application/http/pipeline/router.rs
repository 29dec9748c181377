use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_latest_run::{__path_get_latest_run, get_latest_run},
    submit_run::{__path_submit_run, submit_run},
};
use crate::application::http::server::{
    api_entities::api_error::method_not_allowed, app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(submit_run, get_latest_run))]
pub struct PipelineApiDoc;

pub fn pipeline_routes(state: AppState) -> Router<AppState> {
    let body_limit = state.args.pipeline.max_image_bytes + 64 * 1024;

    Router::new()
        .route(
            &format!("{}/pipeline/runs", state.args.server.root_path),
            post(submit_run).fallback(method_not_allowed),
        )
        .route(
            &format!("{}/pipeline/runs/latest", state.args.server.root_path),
            get(get_latest_run),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}
