//! Error types for the investment game engine.
//!
//! None of these are fatal to a round: table failures fall back to the
//! linear proxy, advisory failures become "no suggestion", and malformed
//! modifier payloads are replaced by neutral modifiers.

use thiserror::Error;

/// Failures reading or building a payoff table.
#[derive(Debug, Error, PartialEq)]
pub enum TableLookupError {
    /// A matrix does not have the expected 26×26 shape.
    #[error("Payoff matrix '{matrix}' has invalid shape: {detail}")]
    Shape { matrix: &'static str, detail: String },

    /// The cell exists but holds NaN or an infinity.
    #[error("Payoff cell ({am_level}, {mc_level}) is not a finite number")]
    NonFinite { am_level: i32, mc_level: i32 },

    /// The cell could not be reached in the stored matrix.
    #[error("Payoff cell ({am_level}, {mc_level}) is missing")]
    Missing { am_level: i32, mc_level: i32 },
}

/// Failures from the external advisory oracle.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    /// No oracle endpoint or credential is configured.
    #[error("Advisory oracle is not configured: {0}")]
    Unconfigured(String),

    /// The oracle did not answer within the allotted time.
    #[error("Advisory oracle timed out after {0} ms")]
    Timeout(u64),

    /// Transport-level failure.
    #[error("Advisory transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("Advisory oracle returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The reply could not be interpreted.
    #[error("Advisory reply could not be parsed: {0}")]
    Parse(String),
}

/// Malformed behavior-modifier payloads.
#[derive(Debug, Error)]
pub enum ModifierError {
    /// Payload does not deserialize into modifiers.
    #[error("Invalid modifier payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Payload is valid JSON but not an object.
    #[error("Invalid modifier payload: expected an object, got {0}")]
    NotAnObject(&'static str),

    /// A field deserialized but holds an unusable value.
    #[error("Invalid modifier field '{field}': {reason}")]
    Field { field: &'static str, reason: String },
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An environment override could not be parsed.
    #[error("Invalid value for {var}: {value}")]
    Env { var: &'static str, value: String },

    /// Values parsed but violate a constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payoff table override is unusable.
    #[error(transparent)]
    Table(#[from] TableLookupError),
}

/// Unknown agent role name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown agent role: {0}")]
pub struct ParseRoleError(pub String);

/// Unknown persona name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown persona: {0}")]
pub struct ParsePersonaError(pub String);
