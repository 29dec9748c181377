pub mod simulated_client;
pub mod vision_client;

use crate::domain::{
    common::{OcrConfig, entities::app_errors::CoreError},
    ocr::{ports::OcrClient, value_objects::OcrMode},
};

pub use simulated_client::SimulatedOcrClient;
pub use vision_client::VisionOcrClient;

/// Text detection backend chosen at startup.
#[derive(Debug, Clone)]
pub enum OcrBackend {
    Live(VisionOcrClient),
    Simulated(SimulatedOcrClient),
}

impl OcrBackend {
    /// Live when an API key is configured, simulated otherwise.
    pub fn from_config(config: &OcrConfig) -> Self {
        match config.vision_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => OcrBackend::Live(VisionOcrClient::new(
                key.to_string(),
                config.vision_endpoint.clone(),
            )),
            _ => OcrBackend::Simulated(SimulatedOcrClient::new(config.simulated_delay)),
        }
    }
}

impl OcrClient for OcrBackend {
    fn mode(&self) -> OcrMode {
        match self {
            OcrBackend::Live(client) => client.mode(),
            OcrBackend::Simulated(client) => client.mode(),
        }
    }

    async fn extract_text(&self, image_base64: String) -> Result<String, CoreError> {
        match self {
            OcrBackend::Live(client) => client.extract_text(image_base64).await,
            OcrBackend::Simulated(client) => client.extract_text(image_base64).await,
        }
    }
}
