//! # investment-game
//!
//! Decision engine for a repeated two-party investment game between two
//! agents, AM and MC. Each round both agents commit an integer investment
//! in `[0, 25]` and are paid from a fixed payoff table.
//!
//! Each agent's move comes from a persona heuristic, an optional advisory
//! suggestion, and a short discounted look-ahead. User-set behavior
//! modifiers are applied last. Per-agent persona weights adapt to the
//! opponent's observed pattern and the agent's own payoff.
//!
//! ```text
//! GameSession ──▶ StrategyMetaLearner::select ──▶ Persona
//!      │                                            │
//!      └──▶ DecisionComposer ◀── AdvisoryOracle ◀───┘
//!                  │
//!                  ▼
//!            PayoffTable ──▶ History ──▶ PatternClassifier ──▶ learner update
//! ```

pub mod advisory;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod persona;
pub mod server;
pub mod session;

pub use advisory::{AdvisoryOracle, AdvisoryRequest, FixedAdvisor, LlmAdvisor, NoAdvisor};
pub use config::{AdvisorConfig, EngineConfig};
pub use engine::{DecisionComposer, DecisionTrace, OpponentPattern, PatternClassifier};
pub use error::{AdvisoryError, ConfigError, ModifierError, TableLookupError};
pub use game::{AgentRole, History, PayoffTable, RoundRecord, Totals};
pub use persona::{BehaviorModifiers, Persona};
pub use session::{GameSession, RoundOptions, RoundOutcome, RoundReport};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
