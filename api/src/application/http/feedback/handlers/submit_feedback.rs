use axum::extract::State;
use chrono::Utc;
use nutriflow_core::domain::feedback::{entities::FeedbackRecord, ports::FeedbackService};

use crate::application::http::{
    feedback::{handlers::FeedbackResponse, validators::SubmitFeedbackValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "feedback",
    summary = "Submit feedback on an analyzed item",
    responses(
        (status = 202, body = FeedbackResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = SubmitFeedbackValidator
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitFeedbackValidator>,
) -> Result<Response<FeedbackResponse>, ApiError> {
    let receipt = state
        .service
        .submit_feedback(FeedbackRecord {
            menu_item_id: payload.menu_item_id,
            menu_item_name: payload.menu_item_name,
            accuracy: payload.accuracy,
            helpfulness: payload.helpfulness,
            comments: payload.comments,
            timestamp: payload.timestamp.unwrap_or_else(Utc::now),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Accepted(receipt.into()))
}
