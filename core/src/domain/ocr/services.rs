use std::time::Instant;

use base64::{Engine as _, engine::general_purpose};
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackSink,
    image::ports::ImageOptimizer,
    ocr::{
        ports::{OcrClient, OcrService},
        value_objects::{ExtractTextInput, ExtractTextOutput},
    },
};

impl<IO, OC, FS> OcrService for Service<IO, OC, FS>
where
    IO: ImageOptimizer,
    OC: OcrClient,
    FS: FeedbackSink,
{
    #[instrument(skip(self, input), fields(mode = ?self.ocr_client.mode(), payload_len = input.image_base64.len()))]
    async fn extract_text(&self, input: ExtractTextInput) -> Result<ExtractTextOutput, CoreError> {
        let image_base64 = input.image_base64.trim();
        if image_base64.is_empty() {
            return Err(CoreError::InvalidInput("No image provided".to_string()));
        }
        if general_purpose::STANDARD.decode(image_base64).is_err() {
            return Err(CoreError::InvalidInput(
                "image must be base64 without a data URL prefix".to_string(),
            ));
        }

        let started = Instant::now();
        let text = tokio::time::timeout(
            self.pipeline_config.stage_timeout,
            self.ocr_client.extract_text(image_base64.to_string()),
        )
        .await
        .map_err(|_| {
            tracing::error!("text detection timed out");
            CoreError::OcrService("text detection timed out".to_string())
        })??;
        let processing_time_ms = started.elapsed().as_millis() as u64;

        tracing::info!(processing_time_ms, chars = text.len(), "text extracted");

        Ok(ExtractTextOutput {
            text,
            processing_time_ms,
        })
    }
}
