use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_analysis::value_objects::{AnalyzeMenuInput, AnalyzeMenuOutput},
};

/// Service trait for scoring already-extracted menu items
#[cfg_attr(test, mockall::automock)]
pub trait MenuAnalysisService: Send + Sync {
    fn analyze_menu(
        &self,
        input: AnalyzeMenuInput,
    ) -> impl Future<Output = Result<AnalyzeMenuOutput, CoreError>> + Send;
}
