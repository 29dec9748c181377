use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    ocr::{ports::OcrClient, value_objects::OcrMode},
};

const TEXT_DETECTION: &str = "TEXT_DETECTION";

/// Text detection over the Vision `images:annotate` endpoint.
#[derive(Debug, Clone)]
pub struct VisionOcrClient {
    api_key: String,
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    error: Option<AnnotateError>,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    description: String,
}

#[derive(Debug, Deserialize)]
struct AnnotateError {
    #[serde(default)]
    message: String,
}

impl VisionOcrClient {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            client: Client::new(),
        }
    }

    async fn call_vision_api(&self, request: AnnotateRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Vision API request failed: {}", e);
                CoreError::OcrService(format!("Vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Vision API error: {} - {}", status, error_text);
            return Err(CoreError::OcrService(format!(
                "Vision API returned error: {}",
                status
            )));
        }

        let annotate_response: AnnotateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Vision response: {}", e);
            CoreError::OcrService(format!("Failed to parse Vision response: {}", e))
        })?;

        full_text(annotate_response)
    }
}

/// The first annotation of the first response carries the whole detected text.
fn full_text(response: AnnotateResponse) -> Result<String, CoreError> {
    let first = response
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::OcrService("No text detected in image".to_string()))?;

    if let Some(error) = first.error {
        return Err(CoreError::OcrService(error.message));
    }

    first
        .text_annotations
        .into_iter()
        .next()
        .map(|annotation| annotation.description)
        .ok_or_else(|| CoreError::OcrService("No text detected in image".to_string()))
}

impl OcrClient for VisionOcrClient {
    fn mode(&self) -> OcrMode {
        OcrMode::Live
    }

    async fn extract_text(&self, image_base64: String) -> Result<String, CoreError> {
        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: image_base64,
                },
                features: vec![Feature {
                    kind: TEXT_DETECTION,
                }],
            }],
        };

        self.call_vision_api(request).await
    }
}
