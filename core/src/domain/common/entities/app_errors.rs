use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("OCR service error: {0}")]
    OcrService(String),

    #[error("Image optimization failed: {0}")]
    Optimization(String),

    #[error("No menu items could be identified in the image")]
    NoMenuItems,

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Notice shown to the user when a run falls back to the sample results.
    pub fn user_notice(&self) -> String {
        match self {
            CoreError::InvalidInput(reason) => format!("Invalid image: {reason}"),
            CoreError::OcrService(_) => {
                "Failed to read text from the menu, showing sample results.".to_string()
            }
            CoreError::Optimization(_) => {
                "Failed to process the image, showing sample results.".to_string()
            }
            CoreError::NoMenuItems => {
                "No menu items were recognized, showing sample results.".to_string()
            }
            CoreError::InternalServerError => {
                "Failed to analyze menu, showing sample results.".to_string()
            }
        }
    }
}
