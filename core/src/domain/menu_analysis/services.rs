use std::time::Instant;

use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackSink,
    image::ports::ImageOptimizer,
    menu_analysis::{
        ports::MenuAnalysisService,
        scoring::score_menu_item,
        value_objects::{AnalyzeMenuInput, AnalyzeMenuOutput},
    },
    ocr::ports::OcrClient,
};

impl<IO, OC, FS> MenuAnalysisService for Service<IO, OC, FS>
where
    IO: ImageOptimizer,
    OC: OcrClient,
    FS: FeedbackSink,
{
    #[instrument(skip(self, input), fields(items = input.menu_items.len()))]
    async fn analyze_menu(&self, input: AnalyzeMenuInput) -> Result<AnalyzeMenuOutput, CoreError> {
        if input.menu_items.is_empty() {
            return Err(CoreError::InvalidInput(
                "menuItems must be a non-empty list".to_string(),
            ));
        }

        let started = Instant::now();
        let results = input
            .menu_items
            .iter()
            .map(|item| score_menu_item(item, &input.user_profile))
            .collect::<Vec<_>>();
        let processing_time_ms = started.elapsed().as_millis() as u64;

        tracing::info!(processing_time_ms, "menu items scored");

        Ok(AnalyzeMenuOutput {
            results,
            processing_time_ms,
        })
    }
}
