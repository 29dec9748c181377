use crate::domain::{
    menu_analysis::entities::{AnalyzedMenuItem, MenuItem},
    profile::UserProfile,
};

#[derive(Debug, Clone)]
pub struct AnalyzeMenuInput {
    pub menu_items: Vec<MenuItem>,
    pub user_profile: UserProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeMenuOutput {
    pub results: Vec<AnalyzedMenuItem>,
    pub processing_time_ms: u64,
}
