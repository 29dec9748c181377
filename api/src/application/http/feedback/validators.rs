use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackValidator {
    #[validate(length(min = 1, message = "menuItemId is required"))]
    pub menu_item_id: String,
    #[validate(length(min = 1, message = "menuItemName is required"))]
    pub menu_item_name: String,
    #[validate(range(min = 1, max = 5, message = "accuracy must be between 1 and 5"))]
    pub accuracy: u8,
    #[validate(range(min = 1, max = 5, message = "helpfulness must be between 1 and 5"))]
    pub helpfulness: u8,
    #[validate(length(max = 2000, message = "comments must be at most 2000 characters"))]
    pub comments: Option<String>,
    /// Defaults to the time of receipt.
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuickFeedbackValidator {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: u8,
    #[validate(length(max = 2000, message = "comment must be at most 2000 characters"))]
    pub comment: Option<String>,
    #[serde(default = "default_item_name")]
    pub item_name: String,
}

fn default_item_name() -> String {
    "Menu Analysis".to_string()
}
