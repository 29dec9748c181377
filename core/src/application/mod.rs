use crate::{
    domain::{
        common::{NutriflowConfig, services::Service},
        ocr::ports::OcrClient,
    },
    infrastructure::{feedback::TracingFeedbackSink, image::ImageCrateOptimizer, ocr::OcrBackend},
};

pub type NutriflowService = Service<ImageCrateOptimizer, OcrBackend, TracingFeedbackSink>;

/// Wires the production adapters into the domain service.
pub fn create_service(config: NutriflowConfig) -> NutriflowService {
    let ocr_client = OcrBackend::from_config(&config.ocr);
    tracing::info!(mode = ?ocr_client.mode(), "text detection backend selected");

    Service::new(
        ImageCrateOptimizer::new(config.pipeline.max_image_dimension),
        ocr_client,
        TracingFeedbackSink,
        config.pipeline,
    )
}
