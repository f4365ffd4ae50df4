//! Feature assembly
//!
//! Maps extracted fields onto the seven-column row the classifier was trained
//! on. The column order is part of the model contract.

use serde::Serialize;

use super::extractor::ExtractedFields;

/// Column names in training order
pub const FEATURE_COLUMNS: [&str; 7] = [
    "edad",
    "faltas",
    "nota_media",
    "repite",
    "trabaja",
    "horas_estudio",
    "motivacion",
];

/// A single classifier input row.
///
/// Field declaration order matches `FEATURE_COLUMNS`, so the serialized form
/// keeps the schema order as well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub edad: u32,
    pub faltas: u32,
    pub nota_media: f64,
    pub repite: u8,
    pub trabaja: u8,
    pub horas_estudio: u32,
    pub motivacion: u8,
}

impl FeatureRecord {
    /// Numeric values in `FEATURE_COLUMNS` order
    pub fn values(&self) -> [f64; 7] {
        [
            f64::from(self.edad),
            f64::from(self.faltas),
            self.nota_media,
            f64::from(self.repite),
            f64::from(self.trabaja),
            f64::from(self.horas_estudio),
            f64::from(self.motivacion),
        ]
    }

    /// `(column, value)` pairs in schema order
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_COLUMNS.into_iter().zip(self.values())
    }
}

/// Build the classifier row from extracted fields
pub fn assemble(fields: &ExtractedFields) -> FeatureRecord {
    FeatureRecord {
        edad: fields.edad,
        faltas: fields.faltas,
        nota_media: fields.nota,
        repite: u8::from(fields.repite),
        trabaja: u8::from(fields.trabaja),
        horas_estudio: fields.horas,
        motivacion: fields.motivacion.ordinal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::Motivation;

    fn sample() -> ExtractedFields {
        ExtractedFields {
            edad: 20,
            faltas: 5,
            nota: 7.5,
            horas: 10,
            repite: true,
            trabaja: false,
            motivacion: Motivation::Media,
        }
    }

    #[test]
    fn test_assemble_encodes_flags_and_tiers() {
        let record = assemble(&sample());
        assert_eq!(record.values(), [20.0, 5.0, 7.5, 1.0, 0.0, 10.0, 1.0]);
    }

    #[test]
    fn test_assemble_defaults() {
        let record = assemble(&ExtractedFields::default());
        assert_eq!(record.values(), [0.0; 7]);
    }

    #[test]
    fn test_column_order() {
        let record = assemble(&sample());
        let names: Vec<&str> = record.columns().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "edad",
                "faltas",
                "nota_media",
                "repite",
                "trabaja",
                "horas_estudio",
                "motivacion"
            ]
        );
    }

    #[test]
    fn test_serialized_key_order_matches_schema() {
        let json = serde_json::to_string(&assemble(&sample())).unwrap();
        let mut last = 0;
        for column in FEATURE_COLUMNS {
            let pos = json
                .find(&format!("\"{}\"", column))
                .unwrap_or_else(|| panic!("missing column {}", column));
            assert!(pos >= last, "column {} out of order in {}", column, json);
            last = pos;
        }
    }
}
