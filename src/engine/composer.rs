//! Decision composer: turns a persona baseline and an optional advisory
//! suggestion into a committed investment.
//!
//! ```text
//! baseline ─┐
//! advisory ─┼─▶ candidates ∩ [0,25] ─▶ rank by future value ─▶ modifiers ─▶ clamp
//! base ± 2 ─┘
//! ```
//!
//! Only the persona baseline draws randomness; ranking and modifier
//! application are deterministic for fixed inputs.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::future_value::FutureValueEstimator;
use crate::advisory::{consult, AdvisoryOracle, AdvisoryRequest};
use crate::game::best_response::best_response_for;
use crate::game::payoff::PayoffTable;
use crate::game::types::{is_valid_level, AgentRole, History};
use crate::persona::{BaselineInputs, BehaviorModifiers, Persona};

/// Distance of the perturbed neighbors from the baseline.
pub const PERTURBATION: i32 = 2;

/// Default budget for one advisory call.
pub const DEFAULT_ADVISORY_TIMEOUT: Duration = Duration::from_millis(2000);

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Baseline,
    Advisory,
    Perturbed,
}

/// A candidate level and its projected value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub level: i32,
    pub source: CandidateSource,
    pub value: f64,
}

/// Everything that went into one agent's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrace {
    pub role: AgentRole,
    pub persona: Persona,
    pub round_number: u32,
    pub baseline: i32,
    pub advisory: Option<i32>,
    /// Candidates in insertion order.
    pub candidates: Vec<ScoredCandidate>,
    /// Highest-valued candidate, before modifiers.
    pub chosen: i32,
    /// Best response to the opponent's last move, when there is one.
    pub best_response_to_last: Option<i32>,
    pub modifiers: BehaviorModifiers,
    /// Committed investment.
    pub final_level: i32,
}

/// Per-agent inputs to a decision.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub role: AgentRole,
    pub persona: Persona,
    /// Round being decided (1-based).
    pub round_number: u32,
    /// Finalized history up to the previous round.
    pub history: &'a History,
    pub modifiers: BehaviorModifiers,
}

/// Composes decisions against one payoff table and advisory oracle.
#[derive(Debug, Clone, Copy)]
pub struct DecisionComposer<'a> {
    pub table: &'a PayoffTable,
    pub estimator: FutureValueEstimator,
    pub oracle: &'a dyn AdvisoryOracle,
    pub advisory_timeout: Duration,
    /// How many recent rounds the oracle sees.
    pub advisory_window: usize,
}

impl<'a> DecisionComposer<'a> {
    pub fn new(table: &'a PayoffTable, oracle: &'a dyn AdvisoryOracle) -> Self {
        Self {
            table,
            estimator: FutureValueEstimator::default(),
            oracle,
            advisory_timeout: DEFAULT_ADVISORY_TIMEOUT,
            advisory_window: super::pattern::DEFAULT_WINDOW,
        }
    }

    /// Full decision: baseline, one bounded advisory call, ranking, modifiers.
    pub async fn decide<R>(&self, ctx: &DecisionContext<'_>, rng: &mut R) -> DecisionTrace
    where
        R: Rng + Send,
    {
        let baseline = self.baseline(ctx, rng);
        let request = AdvisoryRequest {
            role: ctx.role,
            round_number: ctx.round_number,
            opponent_last_move: ctx.history.last_move(ctx.role.opponent()),
            history_window: ctx.history.window(self.advisory_window).to_vec(),
        };
        let advisory = consult(self.oracle, &request, self.advisory_timeout).await;
        self.compose(ctx, baseline, advisory)
    }

    /// Persona baseline from the previous round's moves.
    pub fn baseline<R: Rng>(&self, ctx: &DecisionContext<'_>, rng: &mut R) -> i32 {
        let inputs = BaselineInputs {
            round_number: ctx.round_number,
            my_last: ctx.history.last_move(ctx.role),
            opp_last: ctx.history.last_move(ctx.role.opponent()),
        };
        ctx.persona.baseline(&inputs, rng)
    }

    /// Deterministic part of a decision, given the baseline and advisory.
    pub fn compose(
        &self,
        ctx: &DecisionContext<'_>,
        baseline: i32,
        advisory: Option<i32>,
    ) -> DecisionTrace {
        let mut candidates: Vec<ScoredCandidate> = Vec::with_capacity(4);
        let mut push = |level: i32, source: CandidateSource| {
            if is_valid_level(level) && !candidates.iter().any(|c| c.level == level) {
                let value = self
                    .estimator
                    .estimate(self.table, ctx.role, level, ctx.history);
                candidates.push(ScoredCandidate { level, source, value });
            }
        };
        push(baseline, CandidateSource::Baseline);
        if let Some(level) = advisory {
            push(level, CandidateSource::Advisory);
        }
        push(baseline - PERTURBATION, CandidateSource::Perturbed);
        push(baseline + PERTURBATION, CandidateSource::Perturbed);

        // Strict comparison keeps the earliest candidate on ties.
        let mut chosen = baseline;
        let mut best_value = f64::NEG_INFINITY;
        for c in &candidates {
            if c.value > best_value {
                best_value = c.value;
                chosen = c.level;
            }
        }

        let final_level = ctx.modifiers.apply(chosen);
        log::debug!(
            "{} round {} ({}): baseline={} advisory={:?} chosen={} final={}",
            ctx.role,
            ctx.round_number,
            ctx.persona,
            baseline,
            advisory,
            chosen,
            final_level
        );

        DecisionTrace {
            role: ctx.role,
            persona: ctx.persona,
            round_number: ctx.round_number,
            baseline,
            advisory,
            candidates,
            chosen,
            best_response_to_last: ctx
                .history
                .last_move(ctx.role.opponent())
                .map(|opp| best_response_for(self.table, ctx.role, opp)),
            modifiers: ctx.modifiers,
            final_level,
        }
    }
}
