//! Abandono Library
//!
//! Turns a transcribed description of a student into a feature row and a
//! dropout risk label ("alta"/"baja").

pub mod asr;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod pipeline;

pub use pipeline::{prepare_text, PredictionResult, Predictor};
