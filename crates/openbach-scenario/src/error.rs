//! Error types for the scenario builder
//!
//! The builder deliberately validates nothing about the dependency graph it
//! assembles (see `openbach-graph` for the opt-in pass); the only fallible
//! operations here are document encoding/decoding and explicit lookups.

use crate::function::FunctionId;

/// Errors surfaced by the scenario builder
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// Scenario document could not be encoded or decoded
    #[error("scenario document error: {0}")]
    Document(#[from] serde_json::Error),

    /// Lookup of an identifier that is not part of this scenario
    #[error("function {0} is not part of this scenario")]
    FunctionNotFound(FunctionId),
}

/// Rejections when parsing a `$name` placeholder from a string
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlaceholderError {
    /// Value does not start with the `$` sigil
    #[error("missing `$` prefix in {0:?}")]
    MissingPrefix(String),

    /// A bare `$` with no name following it
    #[error("empty placeholder name")]
    EmptyName,
}
