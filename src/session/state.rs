//! Session state: the explicit context object every round runs against.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::advisory::{AdvisoryOracle, LlmAdvisor, NoAdvisor};
use crate::config::EngineConfig;
use crate::engine::meta_learner::{PersonaWeights, StrategyMetaLearner};
use crate::error::ConfigError;
use crate::game::payoff::PayoffTable;
use crate::game::types::{AgentRole, History, RoundRecord, Totals};
use crate::persona::{BehaviorModifiers, Persona};

/// Per-agent state carried between rounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentCognitiveState {
    /// Persona used in the most recent round.
    pub persona: Persona,
    pub modifiers: BehaviorModifiers,
    pub total_payoff: i64,
}

/// Read-only view of a session for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub started_at: Option<DateTime<Utc>>,
    pub running: bool,
    pub round: u32,
    pub max_rounds: u32,
    pub totals: Totals,
    pub history: Vec<RoundRecord>,
    pub am: AgentSnapshot,
    pub mc: AgentSnapshot,
}

/// One agent's slice of a [`SessionSnapshot`].
#[derive(Debug, Clone, Serialize)]
pub struct AgentSnapshot {
    pub persona: Persona,
    pub persona_name: &'static str,
    pub modifiers: BehaviorModifiers,
    pub weights: PersonaWeights,
}

/// A single game session.
///
/// Owns the history, totals, persona weights, modifiers and the seedable
/// RNG. Independent sessions share nothing. Hosts serving concurrent
/// requests must hold one lock around each round advance.
#[derive(Debug)]
pub struct GameSession {
    pub(crate) id: Uuid,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) config: EngineConfig,
    pub(crate) table: PayoffTable,
    pub(crate) oracle: Arc<dyn AdvisoryOracle>,
    pub(crate) rng: StdRng,
    pub(crate) running: bool,
    pub(crate) round: u32,
    pub(crate) max_rounds: u32,
    pub(crate) history: History,
    pub(crate) am: AgentCognitiveState,
    pub(crate) mc: AgentCognitiveState,
    pub(crate) learner: StrategyMetaLearner,
}

impl GameSession {
    /// A session that has not been started; call
    /// [`reset_session`](Self::reset_session) before advancing.
    pub fn new(config: EngineConfig, table: PayoffTable, oracle: Arc<dyn AdvisoryOracle>) -> Self {
        let rng = seeded_rng(config.seed);
        let max_rounds = config.max_rounds;
        Self {
            id: Uuid::new_v4(),
            started_at: None,
            config,
            table,
            oracle,
            rng,
            running: false,
            round: 0,
            max_rounds,
            history: History::new(),
            am: AgentCognitiveState::default(),
            mc: AgentCognitiveState::default(),
            learner: StrategyMetaLearner::new(),
        }
    }

    /// Build the table and oracle described by `config`.
    ///
    /// An enabled advisor that cannot be constructed (missing key, bad
    /// client settings) is replaced by [`NoAdvisor`].
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = config.load_payoff_table()?;
        let oracle: Arc<dyn AdvisoryOracle> = if config.advisor.enabled {
            match LlmAdvisor::from_config(&config.advisor, config.advisory_timeout()) {
                Ok(advisor) => Arc::new(advisor),
                Err(e) => {
                    log::warn!("Advisor disabled: {}", e);
                    Arc::new(NoAdvisor)
                }
            }
        } else {
            Arc::new(NoAdvisor)
        };
        Ok(Self::new(config, table, oracle))
    }

    /// Swap the advisory oracle.
    pub fn with_oracle(mut self, oracle: Arc<dyn AdvisoryOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    /// Start a fresh game of `max_rounds` rounds.
    ///
    /// Clears history and totals, resets persona weights to uniform and
    /// modifiers to neutral. A configured seed is re-applied so seeded
    /// sessions replay identically.
    pub fn reset_session(&mut self, max_rounds: u32) {
        self.id = Uuid::new_v4();
        self.started_at = Some(Utc::now());
        if let Some(seed) = self.config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.running = true;
        self.round = 0;
        self.max_rounds = max_rounds;
        self.history = History::new();
        self.am = AgentCognitiveState::default();
        self.mc = AgentCognitiveState::default();
        self.learner.reset();
        log::info!("Session {} started: {} rounds", self.id, max_rounds);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn table(&self) -> &PayoffTable {
        &self.table
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Rounds completed so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn is_complete(&self) -> bool {
        self.running && self.round >= self.max_rounds
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn totals(&self) -> Totals {
        Totals {
            am: self.am.total_payoff,
            mc: self.mc.total_payoff,
        }
    }

    pub fn agent(&self, role: AgentRole) -> &AgentCognitiveState {
        match role {
            AgentRole::Am => &self.am,
            AgentRole::Mc => &self.mc,
        }
    }

    pub(crate) fn agent_mut(&mut self, role: AgentRole) -> &mut AgentCognitiveState {
        match role {
            AgentRole::Am => &mut self.am,
            AgentRole::Mc => &mut self.mc,
        }
    }

    pub fn persona_weights(&self, role: AgentRole) -> &PersonaWeights {
        self.learner.weights(role)
    }

    pub fn get_behavior_modifiers(&self, role: AgentRole) -> BehaviorModifiers {
        self.agent(role).modifiers
    }

    /// Store modifiers exactly as given.
    pub fn set_behavior_modifiers(&mut self, role: AgentRole, modifiers: BehaviorModifiers) {
        self.agent_mut(role).modifiers = modifiers;
    }

    /// Store modifiers from a raw payload, substituting neutral ones when
    /// it is malformed. Returns the stored value and whether a
    /// substitution happened.
    pub fn set_behavior_modifiers_from_payload(
        &mut self,
        role: AgentRole,
        payload: &Value,
    ) -> (BehaviorModifiers, bool) {
        let (modifiers, substituted) = BehaviorModifiers::from_payload_or_neutral(payload);
        self.set_behavior_modifiers(role, modifiers);
        (modifiers, substituted)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let agent = |role: AgentRole| {
            let state = self.agent(role);
            AgentSnapshot {
                persona: state.persona,
                persona_name: state.persona.profile().name,
                modifiers: state.modifiers,
                weights: *self.learner.weights(role),
            }
        };
        SessionSnapshot {
            session_id: self.id,
            started_at: self.started_at,
            running: self.running,
            round: self.round,
            max_rounds: self.max_rounds,
            totals: self.totals(),
            history: self.history.records().to_vec(),
            am: agent(AgentRole::Am),
            mc: agent(AgentRole::Mc),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(
            EngineConfig::default(),
            PayoffTable::standard(),
            Arc::new(NoAdvisor),
        )
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
