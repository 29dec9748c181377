use std::future::Future;

use tokio::sync::watch;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::entities::ImageUpload,
    pipeline::{entities::PipelineSnapshot, orchestrator::RunTicket},
    profile::UserProfile,
};

/// Service trait for the image to analysis pipeline
pub trait PipelineService: Send + Sync {
    /// Starts a run in the background, superseding any run in flight.
    fn submit_menu_image(
        &self,
        upload: ImageUpload,
        profile: UserProfile,
    ) -> Result<RunTicket, CoreError>;

    /// Runs the pipeline on the current task and returns this run's final snapshot.
    fn analyze_menu_image(
        &self,
        upload: ImageUpload,
        profile: UserProfile,
    ) -> impl Future<Output = Result<PipelineSnapshot, CoreError>> + Send;

    fn latest_snapshot(&self) -> PipelineSnapshot;

    fn subscribe(&self) -> watch::Receiver<PipelineSnapshot>;
}
