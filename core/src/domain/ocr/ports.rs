use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ocr::value_objects::{ExtractTextInput, ExtractTextOutput, OcrMode},
};

/// Port for the text detection backend
#[cfg_attr(test, mockall::automock)]
pub trait OcrClient: Send + Sync {
    fn mode(&self) -> OcrMode;

    /// Returns the full detected text. Does not retry.
    fn extract_text(
        &self,
        image_base64: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for standalone text extraction
#[cfg_attr(test, mockall::automock)]
pub trait OcrService: Send + Sync {
    fn extract_text(
        &self,
        input: ExtractTextInput,
    ) -> impl Future<Output = Result<ExtractTextOutput, CoreError>> + Send;
}
