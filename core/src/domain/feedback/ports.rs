use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    feedback::entities::{FeedbackReceipt, FeedbackRecord, FeedbackSubmission, QuickFeedback},
};

/// Port for the external feedback collector
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackSink: Send + Sync {
    fn deliver(
        &self,
        receipt: FeedbackReceipt,
        submission: FeedbackSubmission,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for accepting user feedback
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackService: Send + Sync {
    fn submit_feedback(
        &self,
        record: FeedbackRecord,
    ) -> impl Future<Output = Result<FeedbackReceipt, CoreError>> + Send;

    fn submit_quick_feedback(
        &self,
        feedback: QuickFeedback,
    ) -> impl Future<Output = Result<FeedbackReceipt, CoreError>> + Send;
}
