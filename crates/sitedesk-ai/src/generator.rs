//! Text generator trait

use crate::error::Result;
use async_trait::async_trait;

/// A capability that turns a prompt into prose.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name, for logging.
    fn provider(&self) -> &str;

    /// Whether the generator has the configuration it needs to make calls.
    /// Callers are expected to degrade gracefully when this is false.
    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(&self, prompt: &str) -> Result<String>;
}
