//! Shared application state for request handlers.

use resumake_llm::ResumeGenerator;
use std::sync::Arc;

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<ResumeGenerator>,
}

impl AppState {
    pub fn new(generator: ResumeGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}
