//! Request client for the Resemble AI API.

use std::time::Duration;

use tracing::warn;

use super::http::{bearer_headers, shared_client, status_to_error};
use super::outcome::RequestOutcome;
use super::types::SynthesizePayload;
use crate::config::ResembleConfig;
use crate::error::Result;
use crate::util::timeout::with_timeout;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends authenticated requests to the synthesis and voice-listing
/// endpoints. One attempt per call, no retries; every failure mode is
/// converted to [`RequestOutcome::Failed`] here so callers never see a
/// transport-specific error type.
#[derive(Debug, Clone)]
pub struct ResembleClient {
    config: ResembleConfig,
    timeout: Duration,
}

impl ResembleClient {
    pub fn new(config: ResembleConfig) -> Self {
        Self {
            config,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// POST text to the synthesis endpoint.
    pub async fn synthesize(
        &self,
        text: &str,
        voice_uuid: &str,
        output_format: &str,
    ) -> RequestOutcome {
        let payload = SynthesizePayload::new(text, voice_uuid, output_format);
        let result = with_timeout(self.timeout, async {
            let response = shared_client()
                .post(&self.config.synthesize_url)
                .headers(bearer_headers(&self.config.api_key))
                .json(&payload)
                .send()
                .await?;

            parse_json_response(response).await
        })
        .await;

        into_outcome("synthesis", result)
    }

    /// GET a page of the voice catalog. Pagination values are forwarded
    /// verbatim; the remote service is authoritative on their validity.
    pub async fn list_voices(&self, page: i64, page_size: i64) -> RequestOutcome {
        let result = with_timeout(self.timeout, async {
            let response = shared_client()
                .get(&self.config.voices_url)
                .headers(bearer_headers(&self.config.api_key))
                .query(&[("page", page), ("page_size", page_size)])
                .send()
                .await?;

            parse_json_response(response).await
        })
        .await;

        into_outcome("voice listing", result)
    }
}

async fn parse_json_response(response: reqwest::Response) -> Result<serde_json::Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(status_to_error(status.as_u16(), &body));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

fn into_outcome(operation: &str, result: Result<serde_json::Value>) -> RequestOutcome {
    match result {
        Ok(body) => RequestOutcome::Success(body),
        Err(error) => {
            warn!(target: "resemble", operation, error = %error, "request failed");
            RequestOutcome::Failed(format!("Resemble {operation} request failed: {error}"))
        }
    }
}
