use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use base64::{Engine as _, engine::general_purpose};
use parking_lot::Mutex;
use tokio::{sync::watch, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::domain::{
    common::{PipelineConfig, entities::app_errors::CoreError},
    image::{
        entities::ImageUpload, ports::ImageOptimizer, value_objects::ProgressReporter,
    },
    menu_analysis::{
        entities::AnalyzedMenuItem, fallback::sample_analyzed_items, parser::parse_menu_text,
        scoring::score_menu_item,
    },
    ocr::ports::OcrClient,
    pipeline::entities::{PipelineProgress, PipelineSnapshot, ProgressStage, RunId, RunState},
    profile::UserProfile,
};

/// Optimizer progress (0-100) is scaled into 0..=OPTIMIZE_CEILING.
const OPTIMIZE_CEILING: u8 = 15;
const UPLOAD_CHECKPOINT: u8 = 20;
const EXTRACT_CHECKPOINT: u8 = 25;
const PARSE_CHECKPOINT: u8 = 50;
const SCORING_CHECKPOINT: u8 = 60;
const SCORING_CEILING: u8 = 90;
const RECOMMEND_CHECKPOINT: u8 = 95;
const COMPLETE: u8 = 100;

/// Handle on a run started with [`AnalysisOrchestrator::submit`].
#[derive(Debug)]
pub struct RunTicket {
    pub run_id: RunId,
    handle: JoinHandle<PipelineSnapshot>,
}

impl RunTicket {
    /// Waits for the run and returns its own final snapshot. A superseded run returns the
    /// snapshot it had reached when it was abandoned.
    pub async fn wait(self) -> Result<PipelineSnapshot, CoreError> {
        self.handle.await.map_err(|e| {
            tracing::error!(run_id = %self.run_id, "pipeline task failed: {}", e);
            CoreError::InternalServerError
        })
    }
}

/// Per-run state threaded through every stage.
#[derive(Debug, Clone)]
struct RunContext {
    run_id: RunId,
    cancel: CancellationToken,
}

enum StageError {
    Superseded,
    Failed(CoreError),
}

impl From<CoreError> for StageError {
    fn from(error: CoreError) -> Self {
        StageError::Failed(error)
    }
}

/// Runs optimize, text detection, parsing and scoring for one image at a time.
///
/// Only the most recently submitted run is observable. Submitting cancels the previous run's
/// token and replaces the published snapshot under the channel lock, and every later publish
/// checks the run id under that same lock, so a stale run can never overwrite a newer one.
pub struct AnalysisOrchestrator<IO, OC> {
    image_optimizer: Arc<IO>,
    ocr_client: Arc<OC>,
    config: PipelineConfig,
    latest_run: Arc<AtomicU64>,
    active_run: Arc<Mutex<CancellationToken>>,
    snapshot_tx: Arc<watch::Sender<PipelineSnapshot>>,
}

impl<IO, OC> Clone for AnalysisOrchestrator<IO, OC> {
    fn clone(&self) -> Self {
        Self {
            image_optimizer: Arc::clone(&self.image_optimizer),
            ocr_client: Arc::clone(&self.ocr_client),
            config: self.config.clone(),
            latest_run: Arc::clone(&self.latest_run),
            active_run: Arc::clone(&self.active_run),
            snapshot_tx: Arc::clone(&self.snapshot_tx),
        }
    }
}

impl<IO, OC> AnalysisOrchestrator<IO, OC>
where
    IO: ImageOptimizer + 'static,
    OC: OcrClient + 'static,
{
    pub fn new(image_optimizer: Arc<IO>, ocr_client: Arc<OC>, config: PipelineConfig) -> Self {
        let (snapshot_tx, _) = watch::channel(PipelineSnapshot::default());

        Self {
            image_optimizer,
            ocr_client,
            config,
            latest_run: Arc::new(AtomicU64::new(0)),
            active_run: Arc::new(Mutex::new(CancellationToken::new())),
            snapshot_tx: Arc::new(snapshot_tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PipelineSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn latest_snapshot(&self) -> PipelineSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    pub fn latest_run_id(&self) -> RunId {
        RunId(self.latest_run.load(Ordering::SeqCst))
    }

    /// Starts a run on a background task.
    pub fn submit(
        &self,
        upload: ImageUpload,
        profile: UserProfile,
    ) -> Result<RunTicket, CoreError> {
        self.validate_upload(&upload)?;

        let context = self.begin_run();
        let run_id = context.run_id;
        let orchestrator = self.clone();
        let handle =
            tokio::spawn(async move { orchestrator.execute(context, upload, profile).await });

        Ok(RunTicket { run_id, handle })
    }

    /// Runs the pipeline on the calling task.
    pub async fn run(
        &self,
        upload: ImageUpload,
        profile: UserProfile,
    ) -> Result<PipelineSnapshot, CoreError> {
        self.validate_upload(&upload)?;

        let context = self.begin_run();
        Ok(self.execute(context, upload, profile).await)
    }

    fn validate_upload(&self, upload: &ImageUpload) -> Result<(), CoreError> {
        if !upload.is_image() {
            return Err(CoreError::InvalidInput(
                "Invalid file type. Please provide an image file.".to_string(),
            ));
        }
        if upload.size() == 0 {
            return Err(CoreError::InvalidInput("Image file is empty".to_string()));
        }
        if upload.size() > self.config.max_image_bytes {
            return Err(CoreError::InvalidInput(format!(
                "Image too large. Max size is {} bytes",
                self.config.max_image_bytes
            )));
        }
        Ok(())
    }

    fn begin_run(&self) -> RunContext {
        let mut active = self.active_run.lock();
        active.cancel();

        let cancel = CancellationToken::new();
        *active = cancel.clone();

        let run_id = RunId(self.latest_run.fetch_add(1, Ordering::SeqCst) + 1);
        self.snapshot_tx
            .send_replace(PipelineSnapshot::started(run_id));

        info!(run_id = %run_id, "menu analysis run submitted");
        RunContext { run_id, cancel }
    }

    #[instrument(
        skip(self, context, upload, profile),
        fields(run_id = %context.run_id, file_name = %upload.file_name)
    )]
    async fn execute(
        &self,
        context: RunContext,
        upload: ImageUpload,
        profile: UserProfile,
    ) -> PipelineSnapshot {
        let mut snapshot = PipelineSnapshot::started(context.run_id);

        match self
            .run_stages(&context, &mut snapshot, upload, &profile)
            .await
        {
            Ok(results) => {
                snapshot.results = results;
                let _ = self.advance(
                    &context,
                    &mut snapshot,
                    RunState::Done,
                    ProgressStage::Finalizing,
                    COMPLETE,
                );
                info!(items = snapshot.results.len(), "menu analysis run completed");
            }
            Err(StageError::Superseded) => {
                info!(state = ?snapshot.state, "menu analysis run superseded, abandoning");
            }
            Err(StageError::Failed(error)) => {
                warn!(error = %error, state = ?snapshot.state, "menu analysis run failed, using sample results");
                snapshot.results = sample_analyzed_items();
                snapshot.error = Some(error.user_notice());
                let _ = self.advance(
                    &context,
                    &mut snapshot,
                    RunState::Failed,
                    ProgressStage::Finalizing,
                    COMPLETE,
                );
            }
        }

        snapshot
    }

    async fn run_stages(
        &self,
        context: &RunContext,
        snapshot: &mut PipelineSnapshot,
        upload: ImageUpload,
        profile: &UserProfile,
    ) -> Result<Vec<AnalyzedMenuItem>, StageError> {
        let optimized = self
            .suspend(
                context,
                self.image_optimizer
                    .optimize(upload, self.optimizer_progress(context)),
                || CoreError::Optimization("image optimization timed out".to_string()),
            )
            .await?;
        snapshot.image = Some(optimized.metadata());

        self.advance(
            context,
            snapshot,
            RunState::ExtractingText,
            ProgressStage::Uploading,
            UPLOAD_CHECKPOINT,
        )?;
        let image_base64 = general_purpose::STANDARD.encode(&optimized.upload.bytes);

        self.advance(
            context,
            snapshot,
            RunState::ExtractingText,
            ProgressStage::Extracting,
            EXTRACT_CHECKPOINT,
        )?;
        let text = self
            .suspend(context, self.ocr_client.extract_text(image_base64), || {
                CoreError::OcrService("text detection timed out".to_string())
            })
            .await?;

        self.advance(
            context,
            snapshot,
            RunState::ParsingItems,
            ProgressStage::Identifying,
            PARSE_CHECKPOINT,
        )?;
        let items = parse_menu_text(&text);
        if items.is_empty() {
            return Err(CoreError::NoMenuItems.into());
        }

        self.advance(
            context,
            snapshot,
            RunState::Scoring,
            ProgressStage::Analyzing,
            SCORING_CHECKPOINT,
        )?;
        let total = items.len();
        let mut results = Vec::with_capacity(total);
        for (index, item) in items.iter().enumerate() {
            results.push(score_menu_item(item, profile));

            let span = usize::from(SCORING_CEILING - SCORING_CHECKPOINT);
            let percent = SCORING_CHECKPOINT + (span * (index + 1) / total) as u8;
            self.advance(
                context,
                snapshot,
                RunState::Scoring,
                ProgressStage::Analyzing,
                percent,
            )?;
            tokio::task::yield_now().await;
        }

        self.advance(
            context,
            snapshot,
            RunState::Scoring,
            ProgressStage::Recommending,
            RECOMMEND_CHECKPOINT,
        )?;

        Ok(results)
    }

    /// Awaits one I/O stage, giving up when the run is superseded or the stage times out.
    async fn suspend<T>(
        &self,
        context: &RunContext,
        stage: impl Future<Output = Result<T, CoreError>>,
        on_timeout: impl FnOnce() -> CoreError,
    ) -> Result<T, StageError> {
        tokio::select! {
            biased;
            _ = context.cancel.cancelled() => Err(StageError::Superseded),
            outcome = tokio::time::timeout(self.config.stage_timeout, stage) => match outcome {
                Ok(result) => result.map_err(StageError::Failed),
                Err(_) => Err(StageError::Failed(on_timeout())),
            },
        }
    }

    fn advance(
        &self,
        context: &RunContext,
        snapshot: &mut PipelineSnapshot,
        state: RunState,
        stage: ProgressStage,
        percent: u8,
    ) -> Result<(), StageError> {
        debug_assert!(
            snapshot.state.can_transition_to(state),
            "invalid transition {:?} -> {:?}",
            snapshot.state,
            state
        );

        snapshot.state = state;
        snapshot.progress = PipelineProgress {
            percent: snapshot.progress.percent.max(percent),
            stage,
        };
        snapshot.status = stage.status_message().to_string();

        if self.publish(context, snapshot) {
            Ok(())
        } else {
            Err(StageError::Superseded)
        }
    }

    fn publish(&self, context: &RunContext, snapshot: &PipelineSnapshot) -> bool {
        if context.cancel.is_cancelled() {
            return false;
        }

        let mut current = true;
        self.snapshot_tx.send_if_modified(|published| {
            if published.run_id != context.run_id {
                current = false;
                return false;
            }
            // optimizer progress may already be ahead of the local copy
            let percent = published.progress.percent.max(snapshot.progress.percent);
            *published = snapshot.clone();
            published.progress.percent = percent;
            true
        });
        current
    }

    fn optimizer_progress(&self, context: &RunContext) -> ProgressReporter {
        let snapshot_tx = Arc::clone(&self.snapshot_tx);
        let run_id = context.run_id;
        let cancel = context.cancel.clone();

        ProgressReporter::new(move |percent| {
            if cancel.is_cancelled() {
                return;
            }
            let scaled = (u16::from(percent) * u16::from(OPTIMIZE_CEILING) / 100) as u8;
            snapshot_tx.send_if_modified(|published| {
                if published.run_id != run_id || scaled <= published.progress.percent {
                    return false;
                }
                published.progress.percent = scaled;
                true
            });
        })
    }
}
