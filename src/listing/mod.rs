//! Product listing extraction
//!
//! Turns the free-text answer of a vision model into a structured
//! title + description record.

mod model;
mod normalizer;

pub use model::ProductDescription;
pub use normalizer::normalize;
