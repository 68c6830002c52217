//! Process configuration: bearer credential and remote endpoints.

use std::fmt;

/// Resemble AI text-to-speech synthesis endpoint.
pub const SYNTHESIZE_URL: &str = "https://f.cluster.resemble.ai/synthesize";

/// Resemble AI voice catalog endpoint.
pub const VOICES_URL: &str = "https://app.resemble.ai/api/v2/voices";

/// Stand-in credential used when `RESEMBLE_API_KEY` is absent. Startup does
/// not fail on a missing key; requests sent with this value are rejected by
/// the remote service at call time.
pub const PLACEHOLDER_API_KEY: &str = "Not found";

const API_KEY_ENV: &str = "RESEMBLE_API_KEY";

/// Immutable configuration constructed once at startup and passed by
/// reference into the request client.
#[derive(Clone)]
pub struct ResembleConfig {
    pub api_key: String,
    pub synthesize_url: String,
    pub voices_url: String,
}

impl fmt::Debug for ResembleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResembleConfig")
            .field("api_key", &"..")
            .field("synthesize_url", &self.synthesize_url)
            .field("voices_url", &self.voices_url)
            .finish()
    }
}

impl ResembleConfig {
    /// Create a config with the given credential and the production endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            synthesize_url: SYNTHESIZE_URL.to_string(),
            voices_url: VOICES_URL.to_string(),
        }
    }

    /// Load from the environment (`RESEMBLE_API_KEY`), reading `.env` first.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string()))
    }

    /// Override the synthesis endpoint.
    pub fn with_synthesize_url(mut self, url: impl Into<String>) -> Self {
        self.synthesize_url = url.into();
        self
    }

    /// Override the voice catalog endpoint.
    pub fn with_voices_url(mut self, url: impl Into<String>) -> Self {
        self.voices_url = url.into();
        self
    }

    /// Whether a real credential is configured (not blank, not the placeholder).
    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }
}
