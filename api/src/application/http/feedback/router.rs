use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    submit_feedback::{__path_submit_feedback, submit_feedback},
    submit_quick_feedback::{__path_submit_quick_feedback, submit_quick_feedback},
};
use crate::application::http::server::{
    api_entities::api_error::method_not_allowed, app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(submit_feedback, submit_quick_feedback))]
pub struct FeedbackApiDoc;

pub fn feedback_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/feedback", state.args.server.root_path),
            post(submit_feedback).fallback(method_not_allowed),
        )
        .route(
            &format!("{}/feedback/quick", state.args.server.root_path),
            post(submit_quick_feedback).fallback(method_not_allowed),
        )
}
