use tokio::sync::watch;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackSink,
    image::{entities::ImageUpload, ports::ImageOptimizer},
    ocr::ports::OcrClient,
    pipeline::{entities::PipelineSnapshot, orchestrator::RunTicket, ports::PipelineService},
    profile::UserProfile,
};

impl<IO, OC, FS> PipelineService for Service<IO, OC, FS>
where
    IO: ImageOptimizer + 'static,
    OC: OcrClient + 'static,
    FS: FeedbackSink,
{
    fn submit_menu_image(
        &self,
        upload: ImageUpload,
        profile: UserProfile,
    ) -> Result<RunTicket, CoreError> {
        self.orchestrator.submit(upload, profile)
    }

    async fn analyze_menu_image(
        &self,
        upload: ImageUpload,
        profile: UserProfile,
    ) -> Result<PipelineSnapshot, CoreError> {
        self.orchestrator.run(upload, profile).await
    }

    fn latest_snapshot(&self) -> PipelineSnapshot {
        self.orchestrator.latest_snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<PipelineSnapshot> {
        self.orchestrator.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        common::PipelineConfig,
        feedback::ports::MockFeedbackSink,
        image::{entities::OptimizedImage, ports::MockImageOptimizer},
        menu_analysis::fallback::SAMPLE_MENU_TEXT,
        ocr::{ports::MockOcrClient, value_objects::OcrMode},
        pipeline::entities::{RunId, RunState},
    };

    fn service() -> Service<MockImageOptimizer, MockOcrClient, MockFeedbackSink> {
        let mut image_optimizer = MockImageOptimizer::new();
        image_optimizer.expect_optimize().returning(|upload, progress| {
            Box::pin(async move {
                progress.report(100);
                let size = upload.size();
                Ok(OptimizedImage {
                    upload,
                    width: 640,
                    height: 480,
                    original_size: size,
                    optimized_size: size,
                })
            })
        });

        let mut ocr_client = MockOcrClient::new();
        ocr_client.expect_mode().return_const(OcrMode::Simulated);
        ocr_client
            .expect_extract_text()
            .returning(|_| Box::pin(async { Ok(SAMPLE_MENU_TEXT.to_string()) }));

        Service::new(
            image_optimizer,
            ocr_client,
            MockFeedbackSink::new(),
            PipelineConfig {
                stage_timeout: Duration::from_secs(5),
                ..Default::default()
            },
        )
    }

    fn upload() -> ImageUpload {
        ImageUpload::new("menu.png", "image/png", Bytes::from_static(b"menu"))
    }

    #[tokio::test]
    async fn test_analyze_menu_image_returns_final_snapshot() {
        let service = service();
        let receiver = service.subscribe();

        let snapshot = service
            .analyze_menu_image(upload(), UserProfile::standard())
            .await
            .unwrap();

        assert_eq!(snapshot.run_id, RunId(1));
        assert_eq!(snapshot.state, RunState::Done);
        assert_eq!(snapshot.progress.percent, 100);
        assert_eq!(snapshot.results.len(), 5);
        assert_eq!(snapshot.image.as_ref().unwrap().dimensions, "640x480");
        assert_eq!(service.latest_snapshot(), snapshot);
        assert_eq!(*receiver.borrow(), snapshot);
    }

    #[tokio::test]
    async fn test_subscribers_follow_submitted_run() {
        let service = service();
        let mut receiver = service.subscribe();

        let ticket = service
            .submit_menu_image(upload(), UserProfile::standard())
            .unwrap();

        let mut percents = Vec::new();
        loop {
            receiver.changed().await.unwrap();
            let snapshot = receiver.borrow_and_update().clone();
            percents.push(snapshot.progress.percent);
            if snapshot.is_finished() {
                assert_eq!(snapshot.state, RunState::Done);
                break;
            }
        }

        assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(percents.last(), Some(&100));

        let finished = ticket.wait().await.unwrap();
        assert_eq!(finished, service.latest_snapshot());
    }
}
