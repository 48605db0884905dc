//! Error types for the template engine.

use thiserror::Error;

/// Error type for engine operations.
///
/// Scanning and reconciliation never fail on well-formed inputs; only
/// rendering has a failure mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// A recognized placeholder had no corresponding value at render time.
    #[error("missing value for variable '{0}'")]
    MissingValue(String),
}
