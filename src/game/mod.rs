//! Game primitives: levels, round records, the payoff table and the
//! best-response solver.

pub mod best_response;
pub mod payoff;
mod payoff_data;
pub mod types;

pub use best_response::{best_response, best_response_for};
pub use payoff::{linear_fallback, PayoffMatrices, PayoffTable};
pub use types::{
    clamp_level, is_valid_level, AgentRole, History, RoundRecord, Totals, LEVELS, MAX_LEVEL,
    MIN_LEVEL,
};
