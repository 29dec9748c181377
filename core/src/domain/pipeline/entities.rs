use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{image::entities::ImageMetadata, menu_analysis::entities::AnalyzedMenuItem};

/// Monotonic identifier of a pipeline run. 0 means no run has been submitted.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct RunId(pub u64);

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RunState {
    #[default]
    Idle,
    Optimizing,
    ExtractingText,
    ParsingItems,
    Scoring,
    Done,
    Failed,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Done | RunState::Failed)
    }

    pub fn can_transition_to(self, next: RunState) -> bool {
        use RunState::*;

        match (self, next) {
            (Idle, Optimizing)
            | (Optimizing, ExtractingText)
            | (ExtractingText, ParsingItems)
            | (ParsingItems, Scoring)
            | (Scoring, Done) => true,
            (from, Failed) => !from.is_terminal(),
            (from, to) => from == to && !from.is_terminal(),
        }
    }
}

/// Coarse stage shown next to the progress value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStage {
    #[default]
    Optimizing,
    Uploading,
    Extracting,
    Identifying,
    Analyzing,
    Recommending,
    Finalizing,
}

impl ProgressStage {
    pub fn status_message(self) -> &'static str {
        match self {
            ProgressStage::Optimizing => "Optimizing image size...",
            ProgressStage::Uploading => "Uploading image...",
            ProgressStage::Extracting => "Extracting text from image...",
            ProgressStage::Identifying => "Identifying menu items...",
            ProgressStage::Analyzing => "Analyzing nutritional content...",
            ProgressStage::Recommending => "Generating recommendations...",
            ProgressStage::Finalizing => "Finalizing results...",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineProgress {
    pub percent: u8,
    pub stage: ProgressStage,
}

/// What observers see of the latest run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSnapshot {
    pub run_id: RunId,
    pub state: RunState,
    pub progress: PipelineProgress,
    pub status: String,
    pub results: Vec<AnalyzedMenuItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageMetadata>,
}

impl PipelineSnapshot {
    pub fn started(run_id: RunId) -> Self {
        Self {
            run_id,
            state: RunState::Optimizing,
            progress: PipelineProgress::default(),
            status: ProgressStage::Optimizing.status_message().to_string(),
            ..Default::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }
}
