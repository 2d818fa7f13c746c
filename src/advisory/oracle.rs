//! Advisory oracle contract and the simple in-process implementations.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AdvisoryError;
use crate::game::types::{AgentRole, RoundRecord};

/// What an oracle is told when asked for a suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub role: AgentRole,
    /// Round about to be played (1-based).
    pub round_number: u32,
    pub opponent_last_move: Option<i32>,
    /// Recent rounds, oldest first.
    pub history_window: Vec<RoundRecord>,
}

/// External source of investment suggestions.
///
/// Implementations may be slow or fail; callers bound every call with a
/// timeout and treat any failure as "no suggestion".
#[async_trait]
pub trait AdvisoryOracle: Send + Sync + fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Suggest a level in `[0, 25]`, or `None` to abstain.
    async fn suggest(&self, request: &AdvisoryRequest) -> Result<Option<i32>, AdvisoryError>;
}

/// Oracle that never has an opinion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdvisor;

#[async_trait]
impl AdvisoryOracle for NoAdvisor {
    fn name(&self) -> &str {
        "none"
    }

    async fn suggest(&self, _request: &AdvisoryRequest) -> Result<Option<i32>, AdvisoryError> {
        Ok(None)
    }
}

/// Oracle returning preset suggestions per role.
///
/// Useful for replays and for pinning the advisory input in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedAdvisor {
    suggestions: HashMap<AgentRole, i32>,
}

impl FixedAdvisor {
    /// Same suggestion for both roles.
    pub fn uniform(level: i32) -> Self {
        Self::default()
            .with(AgentRole::Am, level)
            .with(AgentRole::Mc, level)
    }

    pub fn with(mut self, role: AgentRole, level: i32) -> Self {
        self.suggestions.insert(role, level);
        self
    }
}

#[async_trait]
impl AdvisoryOracle for FixedAdvisor {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn suggest(&self, request: &AdvisoryRequest) -> Result<Option<i32>, AdvisoryError> {
        Ok(self.suggestions.get(&request.role).copied())
    }
}
