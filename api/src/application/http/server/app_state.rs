use std::sync::Arc;

use nutriflow_core::application::NutriflowService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriflowService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriflowService) -> Self {
        Self { args, service }
    }
}
