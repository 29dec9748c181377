use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Rating of one analyzed menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub menu_item_id: String,
    pub menu_item_name: String,
    pub accuracy: u8,
    pub helpfulness: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackRecord {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.menu_item_id.trim().is_empty() || self.menu_item_name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "menuItemId and menuItemName are required".to_string(),
            ));
        }
        ensure_rating("accuracy", self.accuracy)?;
        ensure_rating("helpfulness", self.helpfulness)
    }
}

/// One-tap rating of the whole analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuickFeedback {
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub item_name: String,
}

impl QuickFeedback {
    pub fn validate(&self) -> Result<(), CoreError> {
        ensure_rating("rating", self.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackSubmission {
    Detailed(FeedbackRecord),
    Quick(QuickFeedback),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReceipt {
    pub id: Uuid,
    pub accepted: bool,
    pub received_at: DateTime<Utc>,
}

impl FeedbackReceipt {
    pub fn accepted() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            accepted: true,
            received_at: now,
        }
    }
}

fn ensure_rating(field: &str, value: u8) -> Result<(), CoreError> {
    if RATING_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "{field} must be between 1 and 5"
        )))
    }
}
