//! CLI library components for the song catalog normalizer.

pub mod logging;
pub mod pipeline;
pub mod types;
