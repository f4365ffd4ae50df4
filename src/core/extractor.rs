//! Field extraction
//!
//! Pulls the student fields out of prepared text. Numeric fields come from a
//! declarative table of keyword patterns; flags and motivation come from
//! fixed phrases. Nothing here fails: a missing field takes its default.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Typed value of a numeric field.
///
/// The variant is the field's target type and decides the capture shape:
/// `Integer` captures `[0-9]+`, `Decimal` captures `[0-9]+\.?[0-9]*`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Integer(u32),
    Decimal(f64),
}

impl NumericValue {
    fn capture(self) -> &'static str {
        match self {
            NumericValue::Integer(_) => r"([0-9]+)",
            NumericValue::Decimal(_) => r"([0-9]+\.?[0-9]*)",
        }
    }

    pub fn as_u32(self) -> u32 {
        match self {
            NumericValue::Integer(n) => n,
            NumericValue::Decimal(n) => n as u32,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            NumericValue::Integer(n) => f64::from(n),
            NumericValue::Decimal(n) => n,
        }
    }
}

/// A numeric field read from the text as `<keyword> <number>`
#[derive(Debug, Clone, Copy)]
pub struct NumericField {
    pub name: &'static str,
    pub keyword: &'static str,
    /// Value when the keyword or its number is missing
    pub default: NumericValue,
}

impl NumericField {
    /// Regex source for this field, e.g. `edad ([0-9]+)`
    pub fn pattern(&self) -> String {
        format!("{} {}", regex::escape(self.keyword), self.default.capture())
    }

    /// First match in `text`, or the field default
    fn extract(&self, pattern: &Regex, text: &str) -> NumericValue {
        match self.default {
            NumericValue::Integer(d) => NumericValue::Integer(extract(pattern, text, d)),
            // Hundreds of digits overflow to infinity
            NumericValue::Decimal(d) => {
                let n = extract(pattern, text, d);
                NumericValue::Decimal(if n.is_finite() { n } else { d })
            }
        }
    }
}

pub const EDAD: NumericField = NumericField {
    name: "edad",
    keyword: "edad",
    default: NumericValue::Integer(0),
};
pub const FALTAS: NumericField = NumericField {
    name: "faltas",
    keyword: "faltas",
    default: NumericValue::Integer(0),
};
pub const NOTA: NumericField = NumericField {
    name: "nota",
    keyword: "nota",
    default: NumericValue::Decimal(0.0),
};
pub const HORAS: NumericField = NumericField {
    name: "horas",
    keyword: "horas",
    default: NumericValue::Integer(0),
};

/// All numeric fields, in extraction order
pub const NUMERIC_FIELDS: [NumericField; 4] = [EDAD, FALTAS, NOTA, HORAS];

/// Phrase that marks a repeating student
pub const REPITE_PHRASE: &str = "repite si";
/// Phrase that marks a working student
pub const TRABAJA_PHRASE: &str = "trabaja si";
pub const MOTIVACION_ALTA_PHRASE: &str = "motivacion alta";
pub const MOTIVACION_MEDIA_PHRASE: &str = "motivacion media";

lazy_static! {
    /// Compiled patterns, index-aligned with `NUMERIC_FIELDS`
    static ref PATTERNS: Vec<Regex> = NUMERIC_FIELDS
        .iter()
        .map(|field| Regex::new(&field.pattern()).expect("numeric field pattern is valid"))
        .collect();
}

/// Motivation tier, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Motivation {
    #[default]
    Baja,
    Media,
    Alta,
}

impl Motivation {
    /// Ordinal used by the classifier (baja=0, media=1, alta=2)
    pub fn ordinal(self) -> u8 {
        match self {
            Motivation::Baja => 0,
            Motivation::Media => 1,
            Motivation::Alta => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Motivation::Baja => "baja",
            Motivation::Media => "media",
            Motivation::Alta => "alta",
        }
    }

    /// "alta" wins over "media" when both phrases appear; neither means "baja"
    pub fn detect(text: &str) -> Self {
        if text.contains(MOTIVACION_ALTA_PHRASE) {
            Motivation::Alta
        } else if text.contains(MOTIVACION_MEDIA_PHRASE) {
            Motivation::Media
        } else {
            Motivation::Baja
        }
    }
}

/// Student fields read from a transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub edad: u32,
    pub faltas: u32,
    pub nota: f64,
    pub horas: u32,
    pub repite: bool,
    pub trabaja: bool,
    pub motivacion: Motivation,
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self {
            edad: EDAD.default.as_u32(),
            faltas: FALTAS.default.as_u32(),
            nota: NOTA.default.as_f64(),
            horas: HORAS.default.as_u32(),
            repite: false,
            trabaja: false,
            motivacion: Motivation::Baja,
        }
    }
}

/// First match of `pattern` in `text`, parsed as `T`, or `default`.
pub fn extract<T: FromStr>(pattern: &Regex, text: &str, default: T) -> T {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().trim_end_matches('.').parse().ok())
        .unwrap_or(default)
}

/// Every numeric field in `NUMERIC_FIELDS` order, defaulted when absent
pub fn extract_numeric(text: &str) -> [NumericValue; 4] {
    let mut values = NUMERIC_FIELDS.map(|field| field.default);
    for ((value, field), pattern) in values.iter_mut().zip(&NUMERIC_FIELDS).zip(PATTERNS.iter()) {
        *value = field.extract(pattern, text);
    }
    values
}

/// Extract every field from prepared (normalized, number-converted) text
pub fn extract_fields(text: &str) -> ExtractedFields {
    let [edad, faltas, nota, horas] = extract_numeric(text);

    let fields = ExtractedFields {
        edad: edad.as_u32(),
        faltas: faltas.as_u32(),
        nota: nota.as_f64(),
        horas: horas.as_u32(),
        repite: text.contains(REPITE_PHRASE),
        trabaja: text.contains(TRABAJA_PHRASE),
        motivacion: Motivation::detect(text),
    };

    debug!("Extracted fields: {:?}", fields);
    fields
}
