use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_analysis::fallback::SAMPLE_MENU_TEXT,
    ocr::{ports::OcrClient, value_objects::OcrMode},
};

/// Stands in for a text detection service: waits, then returns the sample menu.
#[derive(Debug, Clone)]
pub struct SimulatedOcrClient {
    delay: Duration,
}

impl SimulatedOcrClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl OcrClient for SimulatedOcrClient {
    fn mode(&self) -> OcrMode {
        OcrMode::Simulated
    }

    async fn extract_text(&self, _image_base64: String) -> Result<String, CoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(SAMPLE_MENU_TEXT.to_string())
    }
}
