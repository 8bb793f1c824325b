//! Generation backend HTTP client.

use async_trait::async_trait;
use chat_core::{GenerationError, Generator, MediaAttachments, Reply};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::config::ApiConfig;
use crate::error::{ApiError, DEFAULT_FAILURE_REASON};
use crate::types::{DemoList, DemoVideo, ErrorBody, GenerateRequest, GenerateResponse};

/// Client for the generation backend.
///
/// No client-wide timeout is configured: a generation can take as long as
/// the backend needs to render. Only the demo listing is bounded.
#[derive(Clone)]
pub struct GenerationClient {
    http: Client,
    config: ApiConfig,
}

impl GenerationClient {
    /// Build a client for the given backend.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().build().map_err(ApiError::Http)?;
        info!("Generation backend at {}", config.base_url);
        Ok(Self { http, config })
    }

    /// Ask the backend to explain and animate a concept.
    ///
    /// Non-success statuses become [`ApiError::Status`] carrying the
    /// backend's `error` field when the body has one. A relative
    /// `video_url` is rewritten against the base URL.
    pub async fn generate_video(&self, concept: &str) -> Result<GenerateResponse, ApiError> {
        let url = self.config.generate_url();
        debug!("Generate: {} ({} chars)", url, concept.len());

        let response = self
            .http
            .post(&url)
            .json(&GenerateRequest { concept })
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| DEFAULT_FAILURE_REASON.to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(ApiError::Http)?;
        let mut data: GenerateResponse = serde_json::from_str(&body)?;
        data.video_url = data
            .video_url
            .filter(|url| !url.is_empty())
            .map(|url| self.config.absolutize(&url));
        Ok(data)
    }

    /// List the demo animations for the landing page.
    ///
    /// Never fails: any transport, status or decoding problem, or a backend
    /// slower than the configured demo timeout, is logged and yields an
    /// empty list.
    pub async fn get_demos(&self) -> Vec<DemoVideo> {
        match self.fetch_demos().await {
            Ok(videos) => videos,
            Err(e) => {
                error!("Failed to fetch demos: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_demos(&self) -> Result<Vec<DemoVideo>, ApiError> {
        let url = self.config.demos_url();
        debug!("Demos: {}", url);

        let response = self
            .http
            .get(&url)
            .timeout(self.config.demos_timeout)
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: "demo listing unavailable".to_string(),
            });
        }

        let body = response.text().await.map_err(ApiError::Http)?;
        let list: DemoList = serde_json::from_str(&body)?;
        Ok(list
            .videos
            .into_iter()
            .map(|video| DemoVideo {
                url: self.config.absolutize(&video.url),
                ..video
            })
            .collect())
    }
}

#[async_trait]
impl Generator for GenerationClient {
    async fn generate(&self, question: &str) -> Result<Reply, GenerationError> {
        let response = self.generate_video(question).await?;

        if !response.success {
            debug!("Backend answered without setting success; showing the answer anyway");
        }

        Ok(Reply::new(
            response.explanation,
            MediaAttachments::video(response.video_url.unwrap_or_default()),
        ))
    }

    fn name(&self) -> &str {
        "GenerationClient"
    }
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("config", &self.config)
            .finish()
    }
}
