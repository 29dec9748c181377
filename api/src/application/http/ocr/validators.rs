use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ExtractTextValidator {
    /// Base64 image data without a `data:` URL prefix.
    #[serde(default)]
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,
}
