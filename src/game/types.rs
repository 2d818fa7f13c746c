//! Core game types: agent roles, investment levels, round records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRoleError;

/// Lowest legal investment level.
pub const MIN_LEVEL: i32 = 0;

/// Highest legal investment level.
pub const MAX_LEVEL: i32 = 25;

/// Number of distinct investment levels.
pub const LEVELS: usize = (MAX_LEVEL - MIN_LEVEL + 1) as usize;

/// Clamp any integer into `[MIN_LEVEL, MAX_LEVEL]`.
pub fn clamp_level(level: i64) -> i32 {
    level.clamp(MIN_LEVEL as i64, MAX_LEVEL as i64) as i32
}

/// Whether `level` is a legal investment level.
pub fn is_valid_level(level: i32) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

// ============================================================================
// Agent roles
// ============================================================================

/// One of the two fixed parties in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentRole {
    Am,
    Mc,
}

impl AgentRole {
    /// Both roles in decision order.
    pub const ALL: [AgentRole; 2] = [AgentRole::Am, AgentRole::Mc];

    /// The other party.
    pub fn opponent(self) -> AgentRole {
        match self {
            AgentRole::Am => AgentRole::Mc,
            AgentRole::Mc => AgentRole::Am,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentRole::Am => "am",
            AgentRole::Mc => "mc",
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" => Ok(AgentRole::Am),
            "mc" => Ok(AgentRole::Mc),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

// ============================================================================
// Round records and history
// ============================================================================

/// Outcome of one completed round. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    pub am_investment: i32,
    pub mc_investment: i32,
    pub am_payoff: i64,
    pub mc_payoff: i64,
}

impl RoundRecord {
    /// Investment made by `role` in this round.
    pub fn investment_of(&self, role: AgentRole) -> i32 {
        match role {
            AgentRole::Am => self.am_investment,
            AgentRole::Mc => self.mc_investment,
        }
    }

    /// Payoff received by `role` in this round.
    pub fn payoff_of(&self, role: AgentRole) -> i64 {
        match role {
            AgentRole::Am => self.am_payoff,
            AgentRole::Mc => self.mc_payoff,
        }
    }
}

/// Append-only, ordered sequence of completed rounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    records: Vec<RoundRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: RoundRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&RoundRecord> {
        self.records.last()
    }

    /// Most recent investment made by `role`, if any round has been played.
    pub fn last_move(&self, role: AgentRole) -> Option<i32> {
        self.last().map(|r| r.investment_of(role))
    }

    /// The last `size` records, oldest first.
    pub fn window(&self, size: usize) -> &[RoundRecord] {
        let start = self.records.len().saturating_sub(size);
        &self.records[start..]
    }

    /// The last `size` investments made by `role`, oldest first.
    pub fn investments(&self, role: AgentRole, size: usize) -> Vec<i32> {
        self.window(size)
            .iter()
            .map(|r| r.investment_of(role))
            .collect()
    }
}

/// Cumulative payoffs for both agents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub am: i64,
    pub mc: i64,
}

impl Totals {
    pub fn of(&self, role: AgentRole) -> i64 {
        match role {
            AgentRole::Am => self.am,
            AgentRole::Mc => self.mc,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
