//! HTTP client for the vendor multimodal generation API.
//!
//! Error policy is split by operation kind: the textual helpers (`analyze`,
//! `smart_describe`) degrade to a fixed placeholder so the wizard flow never
//! blocks on them, while the image-producing operations (`generate`,
//! `refine`) propagate failures so the caller can retry instead of silently
//! keeping a stale image. A missing credential always propagates.

use std::time::Duration;

use async_trait::async_trait;
use reno_core::{ImageFormat, ImagePayload, Resolution};
use url::Url;

use crate::error::{GenError, GenResult};
use crate::prompt::{ANALYZE_INSTRUCTION, PHOTOREAL_PREAMBLE};
use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig, Part,
    ThinkingConfig,
};

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Text model for analysis and scope drafting.
pub const TEXT_MODEL: &str = "gemini-3-flash-preview";

/// General-purpose image model (1K tier and all refinements).
pub const FLASH_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// High-resolution image model (2K/4K tiers).
pub const PRO_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Aspect ratio requested for generated afters.
const ASPECT_RATIO: &str = "4:3";

/// Thinking budget for scope drafting.
const DESCRIBE_THINKING_BUDGET: u32 = 1024;

/// Placeholder returned when analysis degrades.
const ANALYZE_FALLBACK: &str = "Could not analyze image.";

/// Placeholder returned when scope drafting degrades.
const DESCRIBE_FALLBACK: &str = "Could not generate description.";

/// Select the backing image model for a resolution tier.
///
/// A pure function of the tier: the flash model handles 1K, the pro model
/// handles 2K and 4K.
#[must_use]
pub fn model_for(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::R1k => FLASH_IMAGE_MODEL,
        Resolution::R2k | Resolution::R4k => PRO_IMAGE_MODEL,
    }
}

/// Retry policy for generation calls. Exponential backoff, capped.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts including the first.
    pub max_attempts: u32,
    /// Delay before the first retry, in milliseconds.
    pub base_delay_ms: u64,
    /// Upper bound on any single delay, in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
            max_delay_ms: 4000,
        }
    }
}

impl RetryConfig {
    /// Delay before the retry following attempt `attempt` (zero-based).
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> u64 {
        self.base_delay_ms
            .saturating_mul(1_u64 << attempt.min(16))
            .min(self.max_delay_ms)
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Endpoint base URL.
    pub base_url: Url,
    /// Service credential. `None` raises a configuration error on first use.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry policy for image-producing calls.
    pub retry: RetryConfig,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            api_key: None,
            timeout: Duration::from_secs(120),
            retry: RetryConfig::default(),
        }
    }
}

impl GenConfig {
    /// Build a configuration reading the credential from [`API_KEY_ENV`].
    ///
    /// The credential is merely captured here; absence only surfaces when a
    /// call is made.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok(),
            ..Self::default()
        }
    }
}

/// Client over the vendor multimodal API.
#[derive(Debug, Clone)]
pub struct GenClient {
    http: reqwest::Client,
    config: GenConfig,
}

impl GenClient {
    /// Create a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Http`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: GenConfig) -> GenResult<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Create a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Http`] if the underlying HTTP client cannot be
    /// built. A missing credential is not an error here.
    pub fn from_env() -> GenResult<Self> {
        Self::new(GenConfig::from_env())
    }

    fn credential(&self) -> GenResult<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GenError::MissingCredential(API_KEY_ENV))
    }

    fn endpoint(&self, model: &str) -> GenResult<Url> {
        self.config
            .base_url
            .join(&format!("v1beta/models/{model}:generateContent"))
            .map_err(|e| GenError::Malformed(format!("bad endpoint URL: {e}")))
    }

    async fn call(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenResult<GenerateContentResponse> {
        let key = self.credential()?;
        let url = self.endpoint(model)?;

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GenError::Malformed(e.to_string()))
    }

    async fn call_with_retry(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenResult<GenerateContentResponse> {
        let mut attempt = 0;
        loop {
            match self.call(model, request).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    attempt += 1;
                    if !err.is_retryable() || attempt >= self.config.retry.max_attempts {
                        return Err(err);
                    }
                    let delay = self.config.retry.delay_for_attempt(attempt - 1);
                    tracing::warn!(
                        "Generation call to {model} failed (attempt {attempt}/{}), retrying in \
                         {delay}ms: {err}",
                        self.config.retry.max_attempts,
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                }
            }
        }
    }

    fn image_from(response: &GenerateContentResponse) -> Option<ImagePayload> {
        response.first_inline().map(|inline| {
            let format = ImageFormat::from_mime(&inline.mime_type).unwrap_or(ImageFormat::Png);
            ImagePayload::new(format, inline.data.clone())
        })
    }

    /// Propose renovation changes for a before photo.
    ///
    /// Best effort: failures other than a missing credential degrade to a
    /// fixed placeholder string so the flow continues.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::MissingCredential`] only.
    pub async fn analyze(&self, before: &ImagePayload) -> GenResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline(before.format.mime_type(), before.base64.clone()),
                    Part::text(ANALYZE_INSTRUCTION),
                ],
            }],
            generation_config: None,
        };

        match self.call(TEXT_MODEL, &request).await {
            Ok(response) => Ok(response
                .first_text()
                .map_or_else(|| ANALYZE_FALLBACK.to_string(), ToString::to_string)),
            Err(err @ GenError::MissingCredential(_)) => Err(err),
            Err(err) => {
                tracing::warn!("Image analysis degraded: {err}");
                Ok(ANALYZE_FALLBACK.to_string())
            }
        }
    }

    /// Expand free-text notes into a scope-of-work narrative.
    ///
    /// Same degrade contract as [`Self::analyze`].
    ///
    /// # Errors
    ///
    /// Returns [`GenError::MissingCredential`] only.
    pub async fn smart_describe(&self, notes: &str) -> GenResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(crate::prompt::describe_prompt(notes))],
            }],
            generation_config: Some(GenerationConfig {
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: DESCRIBE_THINKING_BUDGET,
                }),
                image_config: None,
            }),
        };

        match self.call(TEXT_MODEL, &request).await {
            Ok(response) => Ok(response
                .first_text()
                .map_or_else(|| DESCRIBE_FALLBACK.to_string(), ToString::to_string)),
            Err(err @ GenError::MissingCredential(_)) => Err(err),
            Err(err) => {
                tracing::warn!("Scope drafting degraded: {err}");
                Ok(DESCRIBE_FALLBACK.to_string())
            }
        }
    }

    /// Generate an after image from a before photo and a prompt.
    ///
    /// The backing model is a pure function of the resolution tier. Returns
    /// the first inline image of the response, or `None` when the model
    /// answered without one.
    ///
    /// # Errors
    ///
    /// Propagates credential, transport, and API failures after exhausting
    /// the retry policy.
    pub async fn generate(
        &self,
        before: &ImagePayload,
        prompt: &str,
        resolution: Resolution,
    ) -> GenResult<Option<ImagePayload>> {
        let model = model_for(resolution);
        let high_res = resolution != Resolution::R1k;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::text(format!("{PHOTOREAL_PREAMBLE} {prompt}")),
                    Part::inline(before.format.mime_type(), before.base64.clone()),
                ],
            }],
            generation_config: Some(GenerationConfig {
                thinking_config: None,
                image_config: Some(ImageConfig {
                    aspect_ratio: ASPECT_RATIO.to_string(),
                    // Only the pro model accepts an explicit output size.
                    image_size: high_res.then(|| resolution.label().to_string()),
                }),
            }),
        };

        let response = self.call_with_retry(model, &request).await?;
        Ok(Self::image_from(&response))
    }

    /// Edit a generated image in place, preserving photorealism.
    ///
    /// Always uses the flash image model. Same contract as
    /// [`Self::generate`].
    ///
    /// # Errors
    ///
    /// Propagates credential, transport, and API failures after exhausting
    /// the retry policy.
    pub async fn refine(
        &self,
        image: &ImagePayload,
        instruction: &str,
    ) -> GenResult<Option<ImagePayload>> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::inline(image.format.mime_type(), image.base64.clone()),
                    Part::text(crate::prompt::refine_prompt(instruction)),
                ],
            }],
            generation_config: None,
        };

        let response = self.call_with_retry(FLASH_IMAGE_MODEL, &request).await?;
        Ok(Self::image_from(&response))
    }
}

/// Abstract generation service, substitutable in drivers and tests.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Propose renovation changes for a before photo.
    ///
    /// # Errors
    ///
    /// Implementations degrade ordinary failures to placeholder text and
    /// only propagate configuration errors.
    async fn analyze(&self, before: &ImagePayload) -> GenResult<String>;

    /// Expand free-text notes into a scope-of-work narrative.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::analyze`].
    async fn smart_describe(&self, notes: &str) -> GenResult<String>;

    /// Generate an after image for a prompt at the given resolution tier.
    ///
    /// # Errors
    ///
    /// Propagates credential, transport, and API failures.
    async fn generate(
        &self,
        before: &ImagePayload,
        prompt: &str,
        resolution: Resolution,
    ) -> GenResult<Option<ImagePayload>>;

    /// Edit a generated image in place.
    ///
    /// # Errors
    ///
    /// Propagates credential, transport, and API failures.
    async fn refine(
        &self,
        image: &ImagePayload,
        instruction: &str,
    ) -> GenResult<Option<ImagePayload>>;
}

#[async_trait]
impl Generator for GenClient {
    async fn analyze(&self, before: &ImagePayload) -> GenResult<String> {
        GenClient::analyze(self, before).await
    }

    async fn smart_describe(&self, notes: &str) -> GenResult<String> {
        GenClient::smart_describe(self, notes).await
    }

    async fn generate(
        &self,
        before: &ImagePayload,
        prompt: &str,
        resolution: Resolution,
    ) -> GenResult<Option<ImagePayload>> {
        GenClient::generate(self, before, prompt, resolution).await
    }

    async fn refine(
        &self,
        image: &ImagePayload,
        instruction: &str,
    ) -> GenResult<Option<ImagePayload>> {
        GenClient::refine(self, image, instruction).await
    }
}
