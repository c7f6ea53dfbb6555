//! prompt-polish
//!
//! Cleans up free-text AI prompts before they are sent to a model: spelling
//! and grammar fixes, a professional tone pass, intent classification and
//! light restructuring, with a human-readable log of everything changed.

pub mod config;
pub mod enhance;
pub mod error;
pub mod normalize;

pub use error::PolishError;
pub use normalize::{normalize, Classification, Pipeline, PipelineOptions, TransformResult};
