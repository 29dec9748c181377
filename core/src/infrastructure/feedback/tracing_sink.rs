use crate::domain::{
    common::entities::app_errors::CoreError,
    feedback::{
        entities::{FeedbackReceipt, FeedbackSubmission},
        ports::FeedbackSink,
    },
};

/// Hands feedback to the log pipeline as structured events.
#[derive(Debug, Clone, Default)]
pub struct TracingFeedbackSink;

impl FeedbackSink for TracingFeedbackSink {
    async fn deliver(
        &self,
        receipt: FeedbackReceipt,
        submission: FeedbackSubmission,
    ) -> Result<(), CoreError> {
        match submission {
            FeedbackSubmission::Detailed(record) => tracing::info!(
                target: "nutriflow::feedback",
                feedback_id = %receipt.id,
                menu_item_id = %record.menu_item_id,
                menu_item_name = %record.menu_item_name,
                accuracy = record.accuracy,
                helpfulness = record.helpfulness,
                comments = record.comments.as_deref().unwrap_or_default(),
                submitted_at = %record.timestamp,
                "feedback received"
            ),
            FeedbackSubmission::Quick(feedback) => tracing::info!(
                target: "nutriflow::feedback",
                feedback_id = %receipt.id,
                item_name = %feedback.item_name,
                rating = feedback.rating,
                comment = feedback.comment.as_deref().unwrap_or_default(),
                "quick feedback received"
            ),
        }

        Ok(())
    }
}
