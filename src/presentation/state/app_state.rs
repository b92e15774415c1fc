use std::sync::Arc;

use crate::application::services::SummaryPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummaryPipeline>,
}
