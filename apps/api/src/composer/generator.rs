//! JD composition entry point.
//!
//! Flow: external key present? → external attempt (bounded by a timeout) →
//!       non-blank text wins, otherwise the deterministic composer runs.
//!
//! The external path never surfaces an error; failures are logged and dropped.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::composer::prompts::build_refine_prompt;
use crate::composer::sections::compose_deterministic;
use crate::composer::text::truncate;
use crate::config::ComposerConfig;
use crate::llm_client::{GeminiClient, LlmError, TextGenerator};
use crate::models::job::{GenerateJdResponse, JobPostingRequest};

/// Cap on externally generated output (before the ellipsis).
pub const EXTERNAL_MAX_CHARS: usize = 1400;

/// Composes job descriptions. Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct JdComposer {
    generator: Option<Arc<dyn TextGenerator>>,
    external_timeout: Duration,
}

impl JdComposer {
    /// Deterministic-only composer.
    pub fn deterministic() -> Self {
        Self {
            generator: None,
            external_timeout: Duration::ZERO,
        }
    }

    /// Uses Gemini when a key is configured. A client that cannot be built
    /// leaves the composer deterministic-only.
    pub fn from_config(config: &ComposerConfig) -> Self {
        let Some(api_key) = config.external_api_key.clone() else {
            return Self::deterministic();
        };

        match GeminiClient::new(api_key) {
            Ok(client) => Self::with_generator(Arc::new(client), config.external_timeout),
            Err(e) => {
                warn!("Gemini client init failed, using deterministic composer only: {e}");
                Self::deterministic()
            }
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>, external_timeout: Duration) -> Self {
        Self {
            generator: Some(generator),
            external_timeout,
        }
    }

    pub fn has_external(&self) -> bool {
        self.generator.is_some()
    }

    /// Always produces a posting; never fails.
    pub async fn generate(&self, request: &JobPostingRequest) -> GenerateJdResponse {
        if let Some(generator) = &self.generator {
            match self.try_external(generator.as_ref(), request).await {
                Ok(text) => {
                    info!("JD generated externally ({} chars)", text.chars().count());
                    return GenerateJdResponse {
                        generated_jd: truncate(&text, EXTERNAL_MAX_CHARS),
                    };
                }
                Err(e) => {
                    warn!("External JD generation failed, falling back to deterministic composer: {e}");
                }
            }
        }

        debug!("Composing JD deterministically");
        GenerateJdResponse {
            generated_jd: compose_deterministic(request),
        }
    }

    async fn try_external(
        &self,
        generator: &dyn TextGenerator,
        request: &JobPostingRequest,
    ) -> Result<String, LlmError> {
        let prompt = build_refine_prompt(request);
        let text = tokio::time::timeout(self.external_timeout, generator.generate(&prompt))
            .await
            .map_err(|_| LlmError::Timeout(self.external_timeout.as_millis()))??;

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }
}
