//! Error types for the prompt manager.

use promptdeck_engine::{EngineError, ValidationError};
use thiserror::Error;

/// Error type for store and loader operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// No prompt with the given id exists.
    #[error("prompt not found: {0}")]
    PromptNotFound(u64),

    /// The named variable is not declared in the prompt's schema.
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    /// A render request did not cover the template's placeholders exactly.
    #[error("invalid render request: {}", format_findings(.0))]
    InvalidRender(Vec<ValidationError>),

    /// An error from the template engine.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// An I/O error from loading prompt files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_findings(findings: &[ValidationError]) -> String {
    findings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
