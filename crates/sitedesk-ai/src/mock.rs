//! Mock generator for tests

use async_trait::async_trait;

use crate::error::{AiError, Result};
use crate::generator::TextGenerator;

/// Canned-response generator.
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    response: Option<String>,
    configured: bool,
}

impl MockTextGenerator {
    /// A configured generator that always returns `response`.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            configured: true,
        }
    }

    /// A configured generator whose calls always fail.
    pub fn failing() -> Self {
        Self {
            response: None,
            configured: true,
        }
    }

    /// A generator with no configuration at all.
    pub fn unconfigured() -> Self {
        Self {
            response: None,
            configured: false,
        }
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    fn provider(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        if !self.configured {
            return Err(AiError::MissingApiKey);
        }
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(AiError::Api("mock generation failure".to_string())),
        }
    }
}
