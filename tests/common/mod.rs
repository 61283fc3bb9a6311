#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use traffic_ai::config::Config;
use traffic_ai::routes::create_router;
use traffic_ai::services::completion::{
    CompletionClient, CompletionError, CompletionRequest, CompletionResponse,
};
use traffic_ai::state::AppState;

pub enum Behavior {
    Reply(CompletionResponse),
    Fail(fn() -> CompletionError),
}

/// Stand-in provider that records every request it receives.
pub struct StubClient {
    behavior: Behavior,
    pub calls: Mutex<Vec<CompletionRequest>>,
}

impl StubClient {
    pub fn replying(content: &str) -> Arc<Self> {
        Self::with(Behavior::Reply(CompletionResponse::with_content(content)))
    }

    pub fn with(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.behavior {
            Behavior::Reply(resp) => Ok(resp.clone()),
            Behavior::Fail(make) => Err(make()),
        }
    }
}

pub fn app_with(stub: Arc<StubClient>) -> Router {
    let state = Arc::new(AppState::new(Config::default(), stub));
    create_router().with_state(state)
}
