//! Wire types for the Resemble AI API.

use serde::Serialize;

/// Sample rate requested for every synthesis call.
pub const SAMPLE_RATE: u32 = 48_000;

/// JSON body for the synthesis endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesizePayload {
    pub voice_uuid: String,
    pub data: String,
    pub sample_rate: u32,
    pub output_format: String,
}

impl SynthesizePayload {
    pub fn new(
        text: impl Into<String>,
        voice_uuid: impl Into<String>,
        output_format: impl Into<String>,
    ) -> Self {
        Self {
            voice_uuid: voice_uuid.into(),
            data: text.into(),
            sample_rate: SAMPLE_RATE,
            output_format: output_format.into(),
        }
    }
}
