use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feedback::{
        entities::{FeedbackReceipt, FeedbackRecord, FeedbackSubmission, QuickFeedback},
        ports::{FeedbackService, FeedbackSink},
    },
    image::ports::ImageOptimizer,
    ocr::ports::OcrClient,
};

impl<IO, OC, FS> FeedbackService for Service<IO, OC, FS>
where
    IO: ImageOptimizer,
    OC: OcrClient,
    FS: FeedbackSink,
{
    #[instrument(skip(self, record), fields(menu_item_id = %record.menu_item_id))]
    async fn submit_feedback(&self, record: FeedbackRecord) -> Result<FeedbackReceipt, CoreError> {
        record.validate()?;

        let receipt = FeedbackReceipt::accepted();
        self.feedback_sink
            .deliver(receipt.clone(), FeedbackSubmission::Detailed(record))
            .await?;

        Ok(receipt)
    }

    #[instrument(skip(self, feedback), fields(rating = feedback.rating))]
    async fn submit_quick_feedback(
        &self,
        feedback: QuickFeedback,
    ) -> Result<FeedbackReceipt, CoreError> {
        feedback.validate()?;

        let receipt = FeedbackReceipt::accepted();
        self.feedback_sink
            .deliver(receipt.clone(), FeedbackSubmission::Quick(feedback))
            .await?;

        Ok(receipt)
    }
}
