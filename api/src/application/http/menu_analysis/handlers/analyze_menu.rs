use axum::extract::State;
use nutriflow_core::domain::{
    common::entities::app_errors::CoreError,
    menu_analysis::{
        entities::AnalyzedMenuItem, ports::MenuAnalysisService, value_objects::AnalyzeMenuInput,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    menu_analysis::validators::AnalyzeMenuValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMenuResponse {
    pub results: Vec<AnalyzedMenuItem>,
    pub processing_time: u64,
}

#[utoipa::path(
    post,
    path = "",
    tag = "menu-analysis",
    summary = "Score menu items",
    description = "Scores each menu item against the user profile.",
    responses(
        (status = 200, body = AnalyzeMenuResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = AnalyzeMenuValidator
)]
pub async fn analyze_menu(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AnalyzeMenuValidator>,
) -> Result<Response<AnalyzeMenuResponse>, ApiError> {
    let output = state
        .service
        .analyze_menu(AnalyzeMenuInput {
            menu_items: payload.menu_items,
            user_profile: payload.user_profile,
        })
        .await
        .map_err(|e| match e {
            CoreError::InvalidInput(_) => ApiError::from(e),
            _ => {
                tracing::error!("menu analysis failed: {}", e);
                ApiError::InternalServerError("Failed to analyze menu".to_string())
            }
        })?;

    Ok(Response::OK(AnalyzeMenuResponse {
        results: output.results,
        processing_time: output.processing_time_ms,
    }))
}
