use axum::extract::State;
use nutriflow_core::domain::ocr::{ports::OcrService, value_objects::ExtractTextInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ocr::validators::ExtractTextValidator,
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
pub struct ExtractTextResponse {
    pub text: String,
    /// Milliseconds spent in text detection.
    pub processing_time: u64,
}

#[utoipa::path(
    post,
    path = "",
    tag = "ocr",
    summary = "Extract text from a menu image",
    description = "Runs text detection over a base64 encoded image and returns the full text.",
    responses(
        (status = 200, body = ExtractTextResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
    request_body = ExtractTextValidator
)]
pub async fn extract_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ExtractTextValidator>,
) -> Result<Response<ExtractTextResponse>, ApiError> {
    let output = state
        .service
        .extract_text(ExtractTextInput {
            image_base64: payload.image,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ExtractTextResponse {
        text: output.text,
        processing_time: output.processing_time_ms,
    }))
}
