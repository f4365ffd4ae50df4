//! Risk model boundary
//!
//! The classifier is an opaque scorer: one feature row in, one continuous
//! score out. This module owns the threshold that turns a score into a label.

pub mod linear;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::FeatureRecord;

pub use linear::LinearModel;

/// Scores at or above this value are high risk
pub const RISK_THRESHOLD: f64 = 0.5;

/// Classifier failures
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("incompatible feature schema: {0}")]
    IncompatibleSchema(String),

    #[error("model runtime failure: {0}")]
    Runtime(String),
}

/// Trait for dropout risk models
pub trait RiskModel: Send + Sync {
    /// Score one feature row
    fn score(&self, record: &FeatureRecord) -> Result<f64, ModelError>;

    /// Get the model name
    fn name(&self) -> &str;
}

/// Dropout risk label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Alta,
    Baja,
}

impl RiskLabel {
    /// Closed threshold: exactly 0.5 is "alta"
    pub fn from_score(score: f64) -> Self {
        if score >= RISK_THRESHOLD {
            RiskLabel::Alta
        } else {
            RiskLabel::Baja
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLabel::Alta => "alta",
            RiskLabel::Baja => "baja",
        }
    }
}

/// Score plus its thresholded label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub score: f64,
    pub label: RiskLabel,
}

/// Score `record` once and apply the risk threshold
pub fn classify(
    model: &dyn RiskModel,
    record: &FeatureRecord,
) -> Result<Classification, ModelError> {
    let score = model.score(record)?;
    let label = RiskLabel::from_score(score);
    debug!("Model '{}' scored {} -> {}", model.name(), score, label.label());
    Ok(Classification { score, label })
}
