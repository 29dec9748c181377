use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::extract_text::{__path_extract_text, extract_text};
use crate::application::http::server::{
    api_entities::api_error::method_not_allowed, app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(extract_text))]
pub struct OcrApiDoc;

pub fn ocr_routes(state: AppState) -> Router<AppState> {
    // base64 inflates the payload by a third
    let body_limit = state.args.pipeline.max_image_bytes / 3 * 4 + 4096;

    Router::new()
        .route(
            &format!("{}/ocr", state.args.server.root_path),
            post(extract_text).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}
