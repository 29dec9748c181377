use axum::extract::State;
use nutriflow_core::domain::pipeline::{entities::PipelineSnapshot, ports::PipelineService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/runs/latest",
    tag = "pipeline",
    summary = "Latest run",
    description = "Progress, status and results of the most recently submitted run.",
    responses(
        (status = 200, body = PipelineSnapshot)
    ),
)]
pub async fn get_latest_run(
    State(state): State<AppState>,
) -> Result<Response<PipelineSnapshot>, ApiError> {
    Ok(Response::OK(state.service.latest_snapshot()))
}
