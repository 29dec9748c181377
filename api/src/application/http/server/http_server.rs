use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use nutriflow_core::{application::create_service, domain::common::NutriflowConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    application::http::{
        feedback::router::feedback_routes,
        health::router::health_routes,
        menu_analysis::router::menu_analysis_routes,
        ocr::router::ocr_routes,
        pipeline::router::pipeline_routes,
        server::{api_entities::api_error::ApiError, app_state::AppState, openapi::ApiDoc},
    },
    args::Args,
};

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = NutriflowConfig::from(args.as_ref().clone());
    let service = create_service(config);

    Ok(AppState::new(args, service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);
    let api_docs = openapi.clone();

    let router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .route(
            &api_docs_url,
            get(move || {
                let api_docs = api_docs.clone();
                async move { axum::Json(api_docs) }
            }),
        )
        .merge(ocr_routes(state.clone()))
        .merge(menu_analysis_routes(state.clone()))
        .merge(pipeline_routes(state.clone()))
        .merge(feedback_routes(state.clone()))
        .merge(health_routes(&root_path))
        .fallback(|| async { ApiError::NotFound("Route not found".to_string()) })
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

/// Adds request metrics and the `/metrics` endpoint. The recorder is process-global, so this
/// is applied once by the binary.
pub fn with_metrics(router: Router, root_path: &str) -> Router {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    router
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer)
}
