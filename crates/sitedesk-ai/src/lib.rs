//! Text-generation capability for SiteDesk.
//!
//! Exposes a provider-agnostic [`TextGenerator`] trait, a Gemini REST client
//! as the default provider, and a mock generator for tests. Callers treat
//! the capability as opaque: prompt in, prose out.

mod error;
mod gemini;
mod generator;
mod mock;

pub use error::{AiError, Result};
pub use gemini::GeminiClient;
pub use generator::TextGenerator;
pub use mock::MockTextGenerator;
