// src/services/openai.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, header};
use tracing::{debug, warn};

use super::completion::{CompletionClient, CompletionError, CompletionRequest, CompletionResponse};
use crate::config::Config;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// `CompletionClient` for the OpenAI chat-completions API and compatible servers.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: Option<String>,
    url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: Option<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .build()?;
        let url = format!("{}{}", base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);
        Ok(Self { http, api_key, url })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, reqwest::Error> {
        if cfg.api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; /talk requests will fail");
        }
        Self::new(cfg.api_key.clone(), &cfg.base_url, cfg.timeout)
    }

    #[cfg(test)]
    fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let api_key = self.api_key.as_deref().ok_or(CompletionError::MissingApiKey)?;

        debug!(model = %request.model, url = %self.url, "sending chat completion");
        let resp = self
            .http
            .post(&self.url)
            .header(header::AUTHORIZATION, format!("Bearer {api_key}"))
            .json(request)
            .send()
            .await
            .map_err(CompletionError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<CompletionResponse>()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))
    }
}
