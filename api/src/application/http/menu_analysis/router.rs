use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::analyze_menu::{__path_analyze_menu, analyze_menu};
use crate::application::http::server::{
    api_entities::api_error::method_not_allowed, app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(analyze_menu))]
pub struct MenuAnalysisApiDoc;

pub fn menu_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/analyze", state.args.server.root_path),
        post(analyze_menu).fallback(method_not_allowed),
    )
}
