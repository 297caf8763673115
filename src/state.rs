// src/state.rs
use std::sync::Arc;

use crate::services::{completion::CompletionClient, risk::RiskFilter};

pub type SharedState = Arc<AppState>;

/// Process-wide dependencies, constructed once at startup and passed into
/// handlers. No per-request mutable state lives here.
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub risk: RiskFilter,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            completion,
            risk: RiskFilter::default(),
        }
    }
}
