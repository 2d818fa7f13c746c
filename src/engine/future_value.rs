//! Discounted future-value projection for a candidate investment.
//!
//! The candidate is held fixed for the whole horizon while the opponent is
//! modelled as mean-reverting toward it:
//!
//! ```text
//! opp(0)   = opponent's latest observed level (12 if none)
//! opp(t+1) = floor((opp(t) + candidate) / 2)
//! value    = Σ_{t=0}^{horizon-1} discount^t · payoff(candidate, opp(t))
//! ```

use crate::game::payoff::PayoffTable;
use crate::game::types::{clamp_level, AgentRole, History};

/// Default projection horizon, in rounds.
pub const DEFAULT_HORIZON: u32 = 3;

/// Default per-round discount factor.
pub const DEFAULT_DISCOUNT: f64 = 0.85;

/// Opponent level assumed before any round has been played.
pub const UNOBSERVED_OPPONENT: i32 = 12;

/// One-step-lookahead estimator over a payoff table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FutureValueEstimator {
    pub horizon: u32,
    pub discount: f64,
}

impl Default for FutureValueEstimator {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            discount: DEFAULT_DISCOUNT,
        }
    }
}

impl FutureValueEstimator {
    pub fn new(horizon: u32, discount: f64) -> Self {
        Self { horizon, discount }
    }

    /// Projected discounted payoff for `role` committing to `candidate`.
    pub fn estimate(
        &self,
        table: &PayoffTable,
        role: AgentRole,
        candidate: i32,
        history: &History,
    ) -> f64 {
        let seed = history
            .last_move(role.opponent())
            .unwrap_or(UNOBSERVED_OPPONENT);
        self.estimate_from(table, role, candidate, seed)
    }

    /// Same as [`estimate`](Self::estimate) with an explicit opponent seed.
    pub fn estimate_from(
        &self,
        table: &PayoffTable,
        role: AgentRole,
        candidate: i32,
        opponent_seed: i32,
    ) -> f64 {
        let candidate = clamp_level(candidate as i64);
        let mut predicted = clamp_level(opponent_seed as i64);
        let mut weight = 1.0;
        let mut value = 0.0;
        for _ in 0..self.horizon {
            value += weight * table.payoff_for(role, candidate, predicted) as f64;
            predicted = (predicted + candidate).div_euclid(2);
            weight *= self.discount;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::RoundRecord;

    fn history_with(am: i32, mc: i32) -> History {
        let mut h = History::new();
        h.push(RoundRecord {
            round_number: 1,
            am_investment: am,
            mc_investment: mc,
            am_payoff: 0,
            mc_payoff: 0,
        });
        h
    }

    #[test]
    fn test_hand_computed_projection() {
        let table = PayoffTable::standard();
        let estimator = FutureValueEstimator::default();
        // AM plays 12 against an opponent last seen at 12: the projection
        // stays at 12 for every step.
        let expected = 327.0 * (1.0 + 0.85 + 0.85 * 0.85);
        let value = estimator.estimate(&table, AgentRole::Am, 12, &history_with(3, 12));
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_history_seeds_at_twelve() {
        let table = PayoffTable::standard();
        let estimator = FutureValueEstimator::default();
        let from_empty = estimator.estimate(&table, AgentRole::Mc, 7, &History::new());
        let explicit = estimator.estimate_from(&table, AgentRole::Mc, 7, 12);
        assert_eq!(from_empty, explicit);
    }

    #[test]
    fn test_opponent_drifts_toward_candidate() {
        let table = PayoffTable::standard();
        let estimator = FutureValueEstimator::new(3, 0.5);
        // MC seed 20, AM candidate 4: opponent path 20 → 12 → 8.
        let expected = table.lookup(4, 20).0 as f64
            + 0.5 * table.lookup(4, 12).0 as f64
            + 0.25 * table.lookup(4, 8).0 as f64;
        let value = estimator.estimate_from(&table, AgentRole::Am, 4, 20);
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_uses_own_side_of_table() {
        let table = PayoffTable::standard();
        let estimator = FutureValueEstimator::new(1, 0.85);
        let mc_value = estimator.estimate(&table, AgentRole::Mc, 5, &history_with(9, 0));
        assert_eq!(mc_value, table.lookup(9, 5).1 as f64);
    }

    #[test]
    fn test_zero_horizon_is_zero() {
        let table = PayoffTable::standard();
        let estimator = FutureValueEstimator::new(0, 0.85);
        assert_eq!(estimator.estimate(&table, AgentRole::Am, 20, &History::new()), 0.0);
    }
}
