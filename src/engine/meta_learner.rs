//! Strategy meta-learning: adaptive persona-selection probabilities.
//!
//! Each agent holds a probability vector over the four personas. After
//! every round the opponent pattern and the agent's payoff nudge the
//! weights, which are then renormalized. The next persona is sampled from
//! the weights rather than taken as the argmax, so every persona keeps a
//! chance of being played.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pattern::OpponentPattern;
use crate::game::types::AgentRole;
use crate::persona::Persona;

const INCREASING_BOOST: [(Persona, f64); 2] =
    [(Persona::Cooperative, 0.08), (Persona::Adaptive, 0.02)];
const DECREASING_BOOST: [(Persona, f64); 2] =
    [(Persona::Competitive, 0.08), (Persona::Balanced, 0.03)];
const UNSTABLE_BOOST: [(Persona, f64); 2] =
    [(Persona::Balanced, 0.10), (Persona::Competitive, 0.05)];
const PROFIT_BOOST: f64 = 0.05;

/// Probability vector over [`Persona::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaWeights {
    weights: [f64; 4],
}

impl Default for PersonaWeights {
    fn default() -> Self {
        Self::uniform()
    }
}

impl PersonaWeights {
    /// 0.25 for every persona.
    pub fn uniform() -> Self {
        Self { weights: [0.25; 4] }
    }

    pub fn get(&self, persona: Persona) -> f64 {
        self.weights[persona.index()]
    }

    /// `(persona, weight)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Persona, f64)> + '_ {
        Persona::ALL.into_iter().zip(self.weights.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Highest-weighted persona; ties go to the earliest in canonical order.
    pub fn leader(&self) -> Persona {
        let mut best = Persona::ALL[0];
        for (persona, weight) in self.iter() {
            if weight > self.get(best) {
                best = persona;
            }
        }
        best
    }

    fn bump(&mut self, persona: Persona, amount: f64) {
        self.weights[persona.index()] += amount;
    }

    fn normalize(&mut self) {
        let total = self.sum();
        if total > 0.0 && total.is_finite() {
            for w in &mut self.weights {
                *w /= total;
            }
        } else {
            *self = Self::uniform();
        }
    }

    /// Apply one round of feedback and renormalize.
    ///
    /// Every applicable rule fires, pattern boosts first, so the profit
    /// bonus goes to whichever persona leads after them.
    pub fn update(&mut self, pattern: OpponentPattern, payoff: i64) {
        let boosts: &[(Persona, f64)] = match pattern {
            OpponentPattern::Increasing => &INCREASING_BOOST,
            OpponentPattern::Decreasing => &DECREASING_BOOST,
            OpponentPattern::Unstable => &UNSTABLE_BOOST,
            OpponentPattern::Flat | OpponentPattern::Unknown => &[],
        };
        for &(persona, amount) in boosts {
            self.bump(persona, amount);
        }
        if payoff > 0 {
            let leader = self.leader();
            self.bump(leader, PROFIT_BOOST);
        }
        self.normalize();
    }

    /// Weighted random draw.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Persona {
        match WeightedIndex::new(self.weights) {
            Ok(dist) => Persona::ALL[dist.sample(rng)],
            Err(e) => {
                log::warn!("Persona weights unusable ({}); using leader", e);
                self.leader()
            }
        }
    }
}

/// Per-agent persona weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetaLearner {
    pub am: PersonaWeights,
    pub mc: PersonaWeights,
}

impl StrategyMetaLearner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to uniform weights for both agents.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn weights(&self, role: AgentRole) -> &PersonaWeights {
        match role {
            AgentRole::Am => &self.am,
            AgentRole::Mc => &self.mc,
        }
    }

    fn weights_mut(&mut self, role: AgentRole) -> &mut PersonaWeights {
        match role {
            AgentRole::Am => &mut self.am,
            AgentRole::Mc => &mut self.mc,
        }
    }

    pub fn update(&mut self, role: AgentRole, pattern: OpponentPattern, payoff: i64) {
        self.weights_mut(role).update(pattern, payoff);
        log::debug!(
            "{} weights after {} / payoff {}: {:?}",
            role,
            pattern,
            payoff,
            self.weights(role)
        );
    }

    pub fn select<R: Rng>(&self, role: AgentRole, rng: &mut R) -> Persona {
        self.weights(role).sample(rng)
    }
}
