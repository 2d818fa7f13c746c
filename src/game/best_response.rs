//! Exhaustive best-response search over the payoff table.

use super::payoff::PayoffTable;
use super::types::{clamp_level, AgentRole, MAX_LEVEL, MIN_LEVEL};

/// Own level maximizing `role`'s payoff against `opponent_level`.
///
/// Scans levels in ascending order and keeps the first maximum, so ties
/// resolve to the lowest investment.
pub fn best_response_for(table: &PayoffTable, role: AgentRole, opponent_level: i32) -> i32 {
    let opponent_level = clamp_level(opponent_level as i64);
    let mut best_level = MIN_LEVEL;
    let mut best_payoff = i64::MIN;
    for level in MIN_LEVEL..=MAX_LEVEL {
        let payoff = table.payoff_for(role, level, opponent_level);
        if payoff > best_payoff {
            best_payoff = payoff;
            best_level = level;
        }
    }
    best_level
}

/// `(am_best, mc_best)`: each agent's best response when its opponent plays
/// `opponent_level`.
pub fn best_response(table: &PayoffTable, opponent_level: i32) -> (i32, i32) {
    (
        best_response_for(table, AgentRole::Am, opponent_level),
        best_response_for(table, AgentRole::Mc, opponent_level),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::payoff::PayoffMatrices;
    use crate::game::types::LEVELS;

    #[test]
    fn test_best_response_dominates_every_level() {
        let table = PayoffTable::standard();
        for x in MIN_LEVEL..=MAX_LEVEL {
            let (am_best, mc_best) = best_response(&table, x);
            let am_value = table.lookup(am_best, x).0;
            let mc_value = table.lookup(x, mc_best).1;
            for level in MIN_LEVEL..=MAX_LEVEL {
                assert!(am_value >= table.lookup(level, x).0, "am vs {}", x);
                assert!(mc_value >= table.lookup(x, level).1, "mc vs {}", x);
            }
        }
    }

    #[test]
    fn test_known_best_responses() {
        let table = PayoffTable::standard();
        assert_eq!(best_response(&table, 0), (0, 0));
        assert_eq!(best_response(&table, 12), (25, 12));
        assert_eq!(best_response(&table, 5), (25, 8));
    }

    #[test]
    fn test_ties_resolve_to_lowest_level() {
        let flat = vec![vec![5.0; LEVELS]; LEVELS];
        let table = PayoffTable::from_matrices(PayoffMatrices {
            am: flat.clone(),
            mc: flat,
        })
        .unwrap();
        assert_eq!(best_response(&table, 17), (0, 0));
    }

    #[test]
    fn test_out_of_range_opponent_is_clamped() {
        let table = PayoffTable::standard();
        assert_eq!(best_response(&table, 400), best_response(&table, 25));
    }
}
