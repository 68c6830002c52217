//! The two Resemble AI speech tools: `generate_tts` and `list_voices`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::info;
use uuid::Uuid;

use super::arguments::ToolArguments;
use super::tool::Tool;
use super::types::ToolParameters;
use crate::error::ServerError;
use crate::resemble::{RequestOutcome, ResembleClient};

/// Returned by `generate_tts` when the remote call fails or the response
/// carries no audio. A successful tool result, not an error.
pub const TTS_FAILURE_MESSAGE: &str = "Unable to generate TTS audio.";

const DEFAULT_OUTPUT_FORMAT: &str = "mp3";
const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// An 8-hex-character voice identifier derived from a v4 UUID.
fn short_voice_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// `generate_tts` — synthesize text into an audio file on disk.
pub struct GenerateTtsTool {
    client: Arc<ResembleClient>,
    default_voice: String,
    output_dir: PathBuf,
    parameters: ToolParameters,
}

impl GenerateTtsTool {
    pub fn new(client: Arc<ResembleClient>) -> Self {
        Self {
            client,
            // Generated once at construction; every call that omits
            // `voice_uuid` shares this id for the life of the server.
            default_voice: short_voice_id(),
            output_dir: PathBuf::from("."),
            parameters: ToolParameters::object()
                .string("text", "The text to convert to speech", true)
                .string(
                    "voice_uuid",
                    "UUID of the voice model to use (a session-fixed default is used when omitted)",
                    false,
                )
                .string("output_format", "Format of the output audio (default: mp3)", false)
                .build(),
        }
    }

    /// Write audio files under `dir` instead of the working directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// The voice id used when a call omits `voice_uuid`.
    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }
}

#[async_trait]
impl Tool for GenerateTtsTool {
    fn name(&self) -> &str {
        "generate_tts"
    }

    fn description(&self) -> &str {
        "Generate text-to-speech audio from text using Resemble AI"
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: &ToolArguments) -> Result<serde_json::Value, ServerError> {
        let text = args.get_str("text")?;
        let voice_uuid = args.get_str_opt("voice_uuid").unwrap_or(&self.default_voice);
        let output_format = args
            .get_str_opt("output_format")
            .unwrap_or(DEFAULT_OUTPUT_FORMAT);

        let outcome = self.client.synthesize(text, voice_uuid, output_format).await;

        // Transport failures and missing-audio responses are deliberately
        // indistinguishable here.
        let Some(encoded) = outcome
            .success()
            .and_then(|body| body.get("audio_content"))
            .and_then(|v| v.as_str())
        else {
            return Ok(serde_json::Value::String(TTS_FAILURE_MESSAGE.to_string()));
        };

        let audio_bytes = STANDARD.decode(encoded)?;

        let file_name = format!("output.{output_format}");
        let path = self.output_dir.join(&file_name);
        tokio::fs::write(&path, &audio_bytes).await?;
        info!(target: "speech", file = %path.display(), bytes = audio_bytes.len(), "audio written");

        Ok(serde_json::Value::String(format!(
            "TTS audio generated and saved as {file_name}"
        )))
    }
}

/// `list_voices` — page through the remote voice catalog.
pub struct ListVoicesTool {
    client: Arc<ResembleClient>,
    parameters: ToolParameters,
}

impl ListVoicesTool {
    pub fn new(client: Arc<ResembleClient>) -> Self {
        Self {
            client,
            parameters: ToolParameters::object()
                .integer("page", "The page number to retrieve (default: 1)", false)
                .integer("page_size", "The number of voices per page (default: 10)", false)
                .build(),
        }
    }
}

#[async_trait]
impl Tool for ListVoicesTool {
    fn name(&self) -> &str {
        "list_voices"
    }

    fn description(&self) -> &str {
        "Retrieve the list of available voice models from Resemble AI"
    }

    fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }

    async fn execute(&self, args: &ToolArguments) -> Result<serde_json::Value, ServerError> {
        // No bounds checking: zero, negative, or huge values go through
        // verbatim and the remote service answers as it sees fit.
        let page = args.get_i64_opt("page").unwrap_or(DEFAULT_PAGE);
        let page_size = args.get_i64_opt("page_size").unwrap_or(DEFAULT_PAGE_SIZE);

        match self.client.list_voices(page, page_size).await {
            RequestOutcome::Success(body) => Ok(body),
            RequestOutcome::Failed(reason) => Ok(serde_json::json!({ "error": reason })),
        }
    }
}
