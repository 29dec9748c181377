use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct NutriflowConfig {
    pub ocr: OcrConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    /// Vision API key. When absent the simulated client is used.
    pub vision_api_key: Option<String>,
    pub vision_endpoint: String,
    pub simulated_delay: Duration,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            vision_api_key: None,
            vision_endpoint: "https://vision.googleapis.com/v1/images:annotate".to_string(),
            simulated_delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub stage_timeout: Duration,
    pub max_image_dimension: u32,
    pub max_image_bytes: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stage_timeout: Duration::from_secs(30),
            max_image_dimension: 2048,
            max_image_bytes: 10 * 1024 * 1024,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
