//! OpenAI-compatible embeddings client
//!
//! Works against any endpoint that speaks the `/embeddings` request shape,
//! including Azure OpenAI deployments. Configured from the environment so no
//! credentials land in the config file.

use crate::embedding::EmbeddingProvider;
use crate::error::{Result, ScreenerError};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub struct OpenAiEmbeddings {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiEmbeddings {
    /// Reads `EMBEDDINGS_API_KEY`, `EMBEDDINGS_API_URL` and
    /// `EMBEDDINGS_MODEL` from the environment.
    pub fn from_env(timeout_secs: u64) -> Result<Self> {
        let api_key = env::var("EMBEDDINGS_API_KEY").map_err(|_| {
            ScreenerError::Configuration(
                "EMBEDDINGS_API_KEY environment variable not set".to_string(),
            )
        })?;

        let base_url = env::var("EMBEDDINGS_API_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model =
            env::var("EMBEDDINGS_MODEL").unwrap_or_else(|_| "text-embedding-3-small".to_string());

        Self::new(api_key, base_url, model, timeout_secs)
    }

    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ScreenerError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            model,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddings {
    async fn embed(&self, text: &str) -> Result<Option<Vec<f32>>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let request = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        debug!("Requesting embedding for {} chars", text.len());

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ScreenerError::Provider(format!("Embedding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ScreenerError::Provider(format!(
                "Embedding API returned {}: {}",
                status, body
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| ScreenerError::Provider(format!("Malformed embedding response: {}", e)))?;

        let embedding = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                ScreenerError::Provider("Embedding response contained no data".to_string())
            })?;

        Ok(Some(embedding))
    }
}
