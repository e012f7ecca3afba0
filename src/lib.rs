//! Mail Insight — email content analysis pipeline.

pub mod config;
pub mod error;
pub mod pipeline;
