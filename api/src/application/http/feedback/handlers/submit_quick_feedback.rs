use axum::extract::State;
use nutriflow_core::domain::feedback::{entities::QuickFeedback, ports::FeedbackService};

use crate::application::http::{
    feedback::{handlers::FeedbackResponse, validators::QuickFeedbackValidator},
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
    path = "/quick",
    tag = "feedback",
    summary = "Rate the whole analysis",
    responses(
        (status = 202, body = FeedbackResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = QuickFeedbackValidator
)]
pub async fn submit_quick_feedback(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<QuickFeedbackValidator>,
) -> Result<Response<FeedbackResponse>, ApiError> {
    let receipt = state
        .service
        .submit_quick_feedback(QuickFeedback {
            rating: payload.rating,
            comment: payload.comment,
            item_name: payload.item_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Accepted(receipt.into()))
}
