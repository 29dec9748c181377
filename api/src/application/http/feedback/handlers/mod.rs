pub mod submit_feedback;
pub mod submit_quick_feedback;

use nutriflow_core::domain::feedback::entities::FeedbackReceipt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub accepted: bool,
    pub id: Uuid,
}

impl From<FeedbackReceipt> for FeedbackResponse {
    fn from(receipt: FeedbackReceipt) -> Self {
        Self {
            accepted: receipt.accepted,
            id: receipt.id,
        }
    }
}
