//! Core processing modules
//!
//! The text-to-features chain: normalization, number words, field
//! extraction and feature assembly. Every stage here is a total function.

pub mod extractor;
pub mod features;
pub mod number_words;
pub mod text_normalizer;

pub use extractor::{extract_fields, ExtractedFields, Motivation};
pub use features::{assemble, FeatureRecord, FEATURE_COLUMNS};
pub use number_words::{convert, parse_token, NumberParse};
pub use text_normalizer::normalize;
