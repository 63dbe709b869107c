use std::sync::Arc;

use healthflow_core::application::HealthflowService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<HealthflowService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HealthflowService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
