//! Mock Risk Model for Testing
//!
//! Returns a fixed score and records every feature row it receives.

use abandono::core::FeatureRecord;
use abandono::model::{ModelError, RiskModel};
use std::sync::{Arc, Mutex};

/// Deterministic stand-in for the trained classifier
pub struct MockModel {
    score: f64,
    /// Simulate a failure on every call
    pub should_fail: bool,
    /// All rows that were scored
    pub received: Arc<Mutex<Vec<FeatureRecord>>>,
}

impl MockModel {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            should_fail: false,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A model whose every call fails with a schema error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new(0.0)
        }
    }

    pub fn received(&self) -> Vec<FeatureRecord> {
        self.received.lock().unwrap().clone()
    }
}

impl RiskModel for MockModel {
    fn score(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        self.received.lock().unwrap().push(*record);
        if self.should_fail {
            return Err(ModelError::IncompatibleSchema("mock schema".to_string()));
        }
        Ok(self.score)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
