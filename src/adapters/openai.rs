//! Client for OpenAI-style image generation endpoints.
//!
//! One generated image costs two requests: a `POST` that returns a
//! temporary URL, then a plain `GET` of that URL for the bytes.

use crate::config::credentials::ApiKey;
use crate::core::{ConfigProvider, ImageGenerator};
use crate::utils::error::{ComicError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiImageClient {
    client: Client,
    endpoint: String,
    api_key: ApiKey,
    model: String,
    size: String,
}

impl OpenAiImageClient {
    pub fn new<C: ConfigProvider>(config: &C, api_key: ApiKey) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        debug!(
            endpoint = config.api_endpoint(),
            model = config.model(),
            size = config.image_size(),
            "Created image client"
        );

        Ok(Self {
            client: builder.build()?,
            endpoint: config.api_endpoint().to_string(),
            api_key,
            model: config.model().to_string(),
            size: config.image_size().to_string(),
        })
    }

    /// Asks the endpoint for exactly one image and returns its URL.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn request_image_url(&self, prompt: &str) -> Result<String> {
        let request = GenerationRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: &self.size,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        debug!("Generation response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, error = %body, "Image generation rejected");
            return Err(ComicError::ImageGeneration {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: GenerationResponse = serde_json::from_str(&body)?;

        parsed
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url)
            .ok_or_else(|| ComicError::MalformedResponse {
                message: "response contained no image URL".to_string(),
            })
    }

    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ComicError::Download {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>> {
        let url = self.request_image_url(prompt).await?;
        self.download(&url).await
    }
}
