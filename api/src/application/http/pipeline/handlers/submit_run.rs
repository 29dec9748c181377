use axum::extract::{Multipart, State};
use bytes::Bytes;
use nutriflow_core::domain::{
    image::entities::ImageUpload,
    pipeline::{entities::RunId, ports::PipelineService},
    profile::UserProfile,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRunResponse {
    pub run_id: RunId,
}

/// Multipart body of a run submission.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct SubmitRunForm {
    #[schema(format = Binary, value_type = String)]
    image: Vec<u8>,
    /// JSON encoded user profile.
    profile: Option<String>,
}

#[utoipa::path(
    post,
    path = "/runs",
    tag = "pipeline",
    summary = "Submit a menu image",
    description = "Starts the analysis pipeline for the image. A new submission supersedes the run in flight.",
    request_body(content = SubmitRunForm, content_type = "multipart/form-data"),
    responses(
        (status = 202, body = SubmitRunResponse),
        (status = 400, body = ApiErrorResponse)
    ),
)]
pub async fn submit_run(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SubmitRunResponse>, ApiError> {
    let mut upload: Option<ImageUpload> = None;
    let mut profile = UserProfile::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or("menu").to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data: Bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                upload = Some(ImageUpload::new(file_name, mime_type, data));
            }
            "profile" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read profile: {}", e))
                })?;
                profile = serde_json::from_str(&value)
                    .map_err(|e| ApiError::BadRequest(format!("Invalid profile: {}", e)))?;
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let ticket = state
        .service
        .submit_menu_image(upload, profile)
        .map_err(ApiError::from)?;

    Ok(Response::Accepted(SubmitRunResponse {
        run_id: ticket.run_id,
    }))
}
