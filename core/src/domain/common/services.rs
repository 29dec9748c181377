use std::sync::Arc;

use crate::domain::{
    common::PipelineConfig, feedback::ports::FeedbackSink, image::ports::ImageOptimizer,
    ocr::ports::OcrClient, pipeline::orchestrator::AnalysisOrchestrator,
};

/// Implements every domain service trait over the injected adapters.
pub struct Service<IO, OC, FS>
where
    IO: ImageOptimizer,
    OC: OcrClient,
    FS: FeedbackSink,
{
    pub(crate) ocr_client: Arc<OC>,
    pub(crate) feedback_sink: Arc<FS>,
    pub(crate) pipeline_config: PipelineConfig,
    pub(crate) orchestrator: AnalysisOrchestrator<IO, OC>,
}

impl<IO, OC, FS> Service<IO, OC, FS>
where
    IO: ImageOptimizer + 'static,
    OC: OcrClient + 'static,
    FS: FeedbackSink,
{
    pub fn new(
        image_optimizer: IO,
        ocr_client: OC,
        feedback_sink: FS,
        pipeline_config: PipelineConfig,
    ) -> Self {
        let ocr_client = Arc::new(ocr_client);
        let orchestrator = AnalysisOrchestrator::new(
            Arc::new(image_optimizer),
            Arc::clone(&ocr_client),
            pipeline_config.clone(),
        );

        Self {
            ocr_client,
            feedback_sink: Arc::new(feedback_sink),
            pipeline_config,
            orchestrator,
        }
    }
}

impl<IO, OC, FS> Clone for Service<IO, OC, FS>
where
    IO: ImageOptimizer,
    OC: OcrClient,
    FS: FeedbackSink,
{
    fn clone(&self) -> Self {
        Self {
            ocr_client: Arc::clone(&self.ocr_client),
            feedback_sink: Arc::clone(&self.feedback_sink),
            pipeline_config: self.pipeline_config.clone(),
            orchestrator: self.orchestrator.clone(),
        }
    }
}
