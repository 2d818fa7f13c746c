//! Advisory oracle: external investment suggestions.
//!
//! The engine asks an oracle at most once per agent per round. Slow,
//! failing, absent or out-of-range answers all collapse to "no suggestion";
//! none of them can abort a round.

pub mod llm;
pub mod oracle;

use std::time::Duration;

pub use llm::{build_prompt, parse_suggestion, LlmAdvisor};
pub use oracle::{AdvisoryOracle, AdvisoryRequest, FixedAdvisor, NoAdvisor};

use crate::error::AdvisoryError;
use crate::game::types::is_valid_level;

/// Ask `oracle` once, bounded by `timeout`.
///
/// Returns `None` on timeout, error, abstention, or a suggestion outside
/// `[0, 25]`.
pub async fn consult(
    oracle: &dyn AdvisoryOracle,
    request: &AdvisoryRequest,
    timeout: Duration,
) -> Option<i32> {
    let outcome = match tokio::time::timeout(timeout, oracle.suggest(request)).await {
        Ok(result) => result,
        Err(_) => Err(AdvisoryError::Timeout(timeout.as_millis() as u64)),
    };
    match outcome {
        Ok(Some(level)) if is_valid_level(level) => Some(level),
        Ok(Some(level)) => {
            log::warn!(
                "Advisory '{}' suggested out-of-range level {} for {}; ignoring",
                oracle.name(),
                level,
                request.role
            );
            None
        }
        Ok(None) => None,
        Err(e) => {
            log::warn!(
                "Advisory '{}' unavailable for {} in round {}: {}",
                oracle.name(),
                request.role,
                request.round_number,
                e
            );
            None
        }
    }
}
