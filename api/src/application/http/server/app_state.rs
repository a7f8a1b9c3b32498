use std::sync::Arc;

use tradebook_core::application::TradebookService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: TradebookService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: TradebookService) -> Self {
        Self { args, service }
    }
}
