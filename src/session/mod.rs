//! Game sessions: the context object behind every round.
//!
//! A [`GameSession`] owns everything that changes between rounds: history,
//! totals, persona weights, behavior modifiers and the RNG. Sessions are
//! independent of one another; nothing is process-global.

pub mod controller;
pub mod state;

pub use controller::{RoundOptions, RoundOutcome, RoundReport};
pub use state::{AgentCognitiveState, AgentSnapshot, GameSession, SessionSnapshot};
