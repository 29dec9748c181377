use std::time::Duration;

use clap::Parser;
use nutriflow_core::domain::common::{NutriflowConfig, OcrConfig, PipelineConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriflow-api", version, about = "NutriFlow menu analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub pipeline: PipelineArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct OcrArgs {
    /// Enables live text detection. Without it the simulated client is used.
    #[arg(long = "vision-api-key", env = "VISION_API_KEY")]
    pub vision_api_key: Option<String>,

    #[arg(
        long = "vision-endpoint",
        env = "VISION_ENDPOINT",
        default_value = "https://vision.googleapis.com/v1/images:annotate"
    )]
    pub vision_endpoint: String,

    #[arg(
        long = "ocr-simulated-delay-ms",
        env = "OCR_SIMULATED_DELAY_MS",
        default_value_t = 1000
    )]
    pub simulated_delay_ms: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PipelineArgs {
    #[arg(
        long = "stage-timeout-secs",
        env = "PIPELINE_STAGE_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub stage_timeout_secs: u64,

    #[arg(
        long = "max-image-dimension",
        env = "MAX_IMAGE_DIMENSION",
        default_value_t = 2048
    )]
    pub max_image_dimension: u32,

    #[arg(long = "max-image-bytes", env = "MAX_IMAGE_BYTES", default_value_t = 10 * 1024 * 1024)]
    pub max_image_bytes: usize,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutriflowConfig {
    fn from(args: Args) -> Self {
        NutriflowConfig {
            ocr: OcrConfig {
                vision_api_key: args.ocr.vision_api_key,
                vision_endpoint: args.ocr.vision_endpoint,
                simulated_delay: Duration::from_millis(args.ocr.simulated_delay_ms),
            },
            pipeline: PipelineConfig {
                stage_timeout: Duration::from_secs(args.pipeline.stage_timeout_secs),
                max_image_dimension: args.pipeline.max_image_dimension,
                max_image_bytes: args.pipeline.max_image_bytes,
            },
        }
    }
}
