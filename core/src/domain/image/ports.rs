use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{
        entities::{ImageUpload, OptimizedImage},
        value_objects::ProgressReporter,
    },
};

/// Port for preparing an uploaded image before text detection
#[cfg_attr(test, mockall::automock)]
pub trait ImageOptimizer: Send + Sync {
    /// Fails with `InvalidInput` for non-image uploads and `Optimization` when decoding fails.
    /// Reports monotonic progress ending at 100 on success.
    fn optimize(
        &self,
        upload: ImageUpload,
        progress: ProgressReporter,
    ) -> impl Future<Output = Result<OptimizedImage, CoreError>> + Send;
}
