//! Mock Transcriber for Testing
//!
//! Provides controlled transcripts and failures for integration tests.

use abandono::asr::{AudioFormat, TranscriptionError, Transcriber};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// What the mock should answer with
pub enum MockReply {
    Transcript(String),
    Unauthorized,
    Unreachable,
}

/// Transcriber that returns a predetermined reply
pub struct MockTranscriber {
    reply: MockReply,
    /// Formats of every request received
    pub formats: Arc<Mutex<Vec<AudioFormat>>>,
}

impl MockTranscriber {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            formats: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_transcript(text: &str) -> Self {
        Self::new(MockReply::Transcript(text.to_string()))
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(
        &self,
        _audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<String, TranscriptionError> {
        self.formats.lock().unwrap().push(format);
        match &self.reply {
            MockReply::Transcript(text) => Ok(text.clone()),
            MockReply::Unauthorized => Err(TranscriptionError::Unauthorized),
            MockReply::Unreachable => Err(TranscriptionError::Unreachable(
                "connection refused".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
