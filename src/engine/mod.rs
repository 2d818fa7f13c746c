//! Decision engine: the analytic core behind each agent's move.
//!
//! | Component              | Role                                           |
//! |------------------------|------------------------------------------------|
//! | `PatternClassifier`    | trend/volatility label for the opponent window |
//! | `FutureValueEstimator` | discounted payoff under a mean-reverting foe   |
//! | `DecisionComposer`     | baseline + advisory + neighbors → final level  |
//! | `StrategyMetaLearner`  | per-agent persona weights, updated each round  |

pub mod composer;
pub mod future_value;
pub mod meta_learner;
pub mod pattern;

pub use composer::{
    CandidateSource, DecisionComposer, DecisionContext, DecisionTrace, ScoredCandidate,
};
pub use future_value::FutureValueEstimator;
pub use meta_learner::{PersonaWeights, StrategyMetaLearner};
pub use pattern::{classify, OpponentPattern, PatternClassifier, WindowStats};
