//! Prediction Pipeline
//!
//! Runs one transcript through the whole chain:
//! raw text → normalized → numbers converted → fields → feature row → label.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use crate::asr::{AudioFormat, Transcriber};
use crate::core::{assemble, convert, extract_fields, normalize, ExtractedFields};
use crate::error::AbandonoResult;
use crate::model::{classify, ModelError, RiskModel};

/// Outcome of a prediction, in the shape returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub texto: String,
    pub edad: u32,
    pub faltas: u32,
    pub nota: f64,
    pub repite: String,
    pub trabaja: String,
    pub horas: u32,
    pub motivacion: String,
    pub prediccion: String,
}

impl PredictionResult {
    fn new(texto: String, fields: &ExtractedFields, prediccion: &str) -> Self {
        Self {
            texto,
            edad: fields.edad,
            faltas: fields.faltas,
            nota: fields.nota,
            repite: yes_no(fields.repite).to_string(),
            trabaja: yes_no(fields.trabaja).to_string(),
            horas: fields.horas,
            motivacion: fields.motivacion.label().to_string(),
            prediccion: prediccion.to_string(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "si"
    } else {
        "no"
    }
}

/// Normalize a transcript and turn its number words into digits
pub fn prepare_text(raw: &str) -> String {
    let normalized = normalize(raw);
    let converted = convert(&normalized);
    debug!("Prepared text: '{}' -> '{}'", raw, converted);
    converted
}

/// Dropout risk predictor around a shared model
#[derive(Clone)]
pub struct Predictor {
    model: Arc<dyn RiskModel>,
}

impl Predictor {
    pub fn new(model: Arc<dyn RiskModel>) -> Self {
        Self { model }
    }

    /// Predict from a raw transcript.
    ///
    /// Text stages never fail; the only error is the model's.
    pub fn predict(&self, raw: &str) -> Result<PredictionResult, ModelError> {
        let texto = prepare_text(raw);
        let fields = extract_fields(&texto);
        let record = assemble(&fields);
        let classification = classify(self.model.as_ref(), &record)?;

        info!(
            "🎯 Prediction: {} (score {:.3})",
            classification.label.label(),
            classification.score
        );

        Ok(PredictionResult::new(
            texto,
            &fields,
            classification.label.label(),
        ))
    }

    /// Transcribe recorded audio, then predict from the transcript
    pub async fn analyze(
        &self,
        transcriber: &dyn Transcriber,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> AbandonoResult<PredictionResult> {
        let transcript = transcriber.transcribe(audio, format).await?;
        debug!("Transcript from {}: '{}'", transcriber.name(), transcript);
        Ok(self.predict(&transcript)?)
    }
}
