//! Linear risk model
//!
//! A linear regression exported as JSON:
//!
//! ```json
//! {
//!   "columns": ["edad", "faltas", "nota_media", "repite", "trabaja", "horas_estudio", "motivacion"],
//!   "coefficients": [0.01, 0.03, -0.08, 0.2, 0.1, -0.02, -0.1],
//!   "intercept": 0.4
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::{ModelError, RiskModel};
use crate::core::{FeatureRecord, FEATURE_COLUMNS};

/// On-disk form of the model
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinearModelFile {
    columns: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Linear regression over the seven feature columns
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: [f64; 7],
    intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: [f64; 7], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Parse a model from JSON, checking it was trained on our schema
    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        let file: LinearModelFile = serde_json::from_str(content)
            .map_err(|e| ModelError::IncompatibleSchema(format!("invalid model file: {}", e)))?;

        if file.columns.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(ModelError::IncompatibleSchema(format!(
                "expected columns {:?}, model has {:?}",
                FEATURE_COLUMNS, file.columns
            )));
        }

        let coefficients: [f64; 7] = file.coefficients.try_into().map_err(|c: Vec<f64>| {
            ModelError::IncompatibleSchema(format!("expected 7 coefficients, got {}", c.len()))
        })?;

        Ok(Self::new(coefficients, file.intercept))
    }

    /// Load a model file from disk
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ModelError::Runtime(format!("cannot read model {}: {}", path.display(), e))
        })?;
        let model = Self::from_json(&content)?;
        info!("📈 Loaded linear model from {}", path.display());
        Ok(model)
    }

    /// Serialize back to the on-disk JSON form
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&LinearModelFile {
            columns: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            coefficients: self.coefficients.to_vec(),
            intercept: self.intercept,
        })
    }
}

impl RiskModel for LinearModel {
    fn score(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        let score = self.intercept
            + self
                .coefficients
                .iter()
                .zip(record.values())
                .map(|(c, v)| c * v)
                .sum::<f64>();

        if score.is_finite() {
            Ok(score)
        } else {
            Err(ModelError::Runtime(format!("non-finite score {}", score)))
        }
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{assemble, ExtractedFields, Motivation};
    use std::io::Write;

    const MODEL_JSON: &str = r#"{
        "columns": ["edad", "faltas", "nota_media", "repite", "trabaja", "horas_estudio", "motivacion"],
        "coefficients": [0.0, 0.05, -0.1, 0.25, 0.0, 0.0, -0.125],
        "intercept": 0.75
    }"#;

    #[test]
    fn test_score_is_intercept_plus_dot_product() {
        let model = LinearModel::from_json(MODEL_JSON).unwrap();
        let record = assemble(&ExtractedFields {
            faltas: 4,
            nota: 5.0,
            repite: true,
            motivacion: Motivation::Alta,
            ..ExtractedFields::default()
        });
        // 0.75 + 0.2 - 0.5 + 0.25 - 0.25
        let score = model.score(&record).unwrap();
        assert!((score - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_default_row_scores_intercept() {
        let model = LinearModel::from_json(MODEL_JSON).unwrap();
        let score = model.score(&assemble(&ExtractedFields::default())).unwrap();
        assert_eq!(score, 0.75);
    }

    #[test]
    fn test_reordered_columns_rejected() {
        let json = MODEL_JSON.replace(r#""edad", "faltas""#, r#""faltas", "edad""#);
        let err = LinearModel::from_json(&json).unwrap_err();
        assert!(matches!(err, ModelError::IncompatibleSchema(_)));
    }

    #[test]
    fn test_wrong_coefficient_count_rejected() {
        let json = MODEL_JSON.replace("-0.125]", "-0.125, 1.0]");
        let err = LinearModel::from_json(&json).unwrap_err();
        assert!(matches!(err, ModelError::IncompatibleSchema(_)));
    }

    #[test]
    fn test_non_finite_score_is_runtime_error() {
        let model = LinearModel::new([f64::MAX; 7], 0.0);
        let record = assemble(&ExtractedFields {
            edad: 10,
            faltas: 10,
            ..ExtractedFields::default()
        });
        assert!(matches!(model.score(&record), Err(ModelError::Runtime(_))));
    }

    #[test]
    fn test_load_from_file_roundtrips() {
        let model = LinearModel::new([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7], -1.0);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(model.to_json().unwrap().as_bytes()).unwrap();

        let loaded = LinearModel::load(file.path()).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_load_missing_file() {
        let err = LinearModel::load(Path::new("/nonexistent/modelo.json")).unwrap_err();
        assert!(matches!(err, ModelError::Runtime(_)));
    }
}
