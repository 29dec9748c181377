use utoipa::OpenApi;

use crate::application::http::{
    feedback::router::FeedbackApiDoc, health::router::HealthApiDoc,
    menu_analysis::router::MenuAnalysisApiDoc, ocr::router::OcrApiDoc,
    pipeline::router::PipelineApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriFlow API"
    ),
    nest(
        (path = "/ocr", api = OcrApiDoc),
        (path = "/analyze", api = MenuAnalysisApiDoc),
        (path = "/pipeline", api = PipelineApiDoc),
        (path = "/feedback", api = FeedbackApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
