//! Deepgram Client
//!
//! Sends a recorded audio file to Deepgram's prerecorded `listen` endpoint
//! and reads back the first alternative of the first channel.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{AudioFormat, TranscriptionError, Transcriber};
use crate::config::Config;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "DEEPGRAM_API_KEY";

/// JSON pointer to the transcript in a `listen` response
const TRANSCRIPT_POINTER: &str = "/results/channels/0/alternatives/0/transcript";

/// Deepgram speech-to-text client
#[derive(Clone)]
pub struct DeepgramClient {
    client: reqwest::Client,
    url: String,
    model: String,
    language: String,
    smart_format: bool,
    timeout: Duration,
    api_key: Option<String>,
}

impl DeepgramClient {
    /// Create a new client from config with an explicit key
    pub fn new(config: &Config, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.deepgram_url.clone(),
            model: config.deepgram_model.clone(),
            language: config.language.clone(),
            smart_format: config.smart_format,
            timeout: Duration::from_secs(config.request_timeout_secs),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Create a new client reading the key from `DEEPGRAM_API_KEY`
    pub fn from_env(config: &Config) -> Self {
        Self::new(config, std::env::var(API_KEY_ENV).ok())
    }

    /// Check if an API key is available
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn query(&self) -> [(&'static str, String); 3] {
        [
            ("model", self.model.clone()),
            ("language", self.language.clone()),
            ("smart_format", self.smart_format.to_string()),
        ]
    }
}

/// Pull the transcript out of a `listen` response body
pub fn parse_transcript(body: &Value) -> Result<String, TranscriptionError> {
    body.pointer(TRANSCRIPT_POINTER)
        .and_then(Value::as_str)
        .map(|t| t.trim().to_string())
        .ok_or_else(|| TranscriptionError::UnrecognizedResponse(body.to_string()))
}

#[async_trait]
impl Transcriber for DeepgramClient {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(TranscriptionError::MissingApiKey)?;

        debug!(
            "🎙️ Sending {} bytes ({}) to {}",
            audio.len(),
            format.content_type(),
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::AUTHORIZATION, format!("Token {}", api_key))
            .header(reqwest::header::CONTENT_TYPE, format.content_type())
            .query(&self.query())
            .body(audio)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TranscriptionError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| TranscriptionError::Unreachable(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            warn!("❌ Deepgram rejected credentials ({})", status);
            return Err(TranscriptionError::Unauthorized);
        }

        if !status.is_success() {
            warn!("❌ Deepgram API Error ({}): {}", status, body_text);
            return Err(TranscriptionError::HttpStatus {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let body: Value = serde_json::from_str(&body_text)
            .map_err(|_| TranscriptionError::UnrecognizedResponse(body_text.clone()))?;

        let transcript = parse_transcript(&body)?;
        info!("📝 Transcribed {} characters", transcript.len());
        Ok(transcript)
    }

    fn name(&self) -> &str {
        "deepgram"
    }
}
