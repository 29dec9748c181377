use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OcrMode {
    /// Calls the configured text detection service.
    Live,
    /// Returns canned menu text.
    Simulated,
}

#[derive(Debug, Clone)]
pub struct ExtractTextInput {
    /// Base64 image payload without a data URL prefix.
    pub image_base64: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractTextOutput {
    pub text: String,
    pub processing_time_ms: u64,
}
