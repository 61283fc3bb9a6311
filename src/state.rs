// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub completions: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(config: Config, completions: Arc<dyn CompletionClient>) -> Self {
        Self {
            config,
            completions,
        }
    }
}
