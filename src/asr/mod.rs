//! ASR (Automatic Speech Recognition) Module
//!
//! Turns recorded audio into a transcript. The prediction pipeline only ever
//! sees the resulting string.

pub mod deepgram;

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

pub use deepgram::DeepgramClient;

/// Transcription failures
#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("missing API key (set DEEPGRAM_API_KEY)")]
    MissingApiKey,

    #[error("unsupported audio format '{0}', use .wav, .mp3 or .m4a")]
    UnsupportedFormat(String),

    #[error("transcription service rejected the credentials")]
    Unauthorized,

    #[error("transcription service unreachable: {0}")]
    Unreachable(String),

    #[error("transcription service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("unrecognized transcription response: {0}")]
    UnrecognizedResponse(String),
}

/// Supported audio containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    M4a,
}

impl AudioFormat {
    /// Resolve the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, TranscriptionError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "wav" => Ok(AudioFormat::Wav),
            "mp3" => Ok(AudioFormat::Mp3),
            "m4a" => Ok(AudioFormat::M4a),
            _ => Err(TranscriptionError::UnsupportedFormat(ext)),
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::M4a => "audio/mp4",
        }
    }
}

/// Trait for speech-to-text services
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio buffer to text
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<String, TranscriptionError>;

    /// Get the service name
    fn name(&self) -> &str;
}
