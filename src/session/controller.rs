//! Round controller: plays one round of the game against a session.

use serde::{Deserialize, Serialize};

use super::state::GameSession;
use crate::engine::composer::{DecisionComposer, DecisionContext, DecisionTrace};
use crate::engine::future_value::FutureValueEstimator;
use crate::engine::pattern::{OpponentPattern, PatternClassifier};
use crate::game::types::{AgentRole, RoundRecord, Totals};
use crate::persona::Persona;

/// Per-round persona overrides. `None` leaves the choice to the learner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundOptions {
    pub am_persona: Option<Persona>,
    pub mc_persona: Option<Persona>,
}

impl RoundOptions {
    pub fn persona_for(&self, role: AgentRole) -> Option<Persona> {
        match role {
            AgentRole::Am => self.am_persona,
            AgentRole::Mc => self.mc_persona,
        }
    }
}

/// Everything produced by a played round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundReport {
    pub record: RoundRecord,
    pub totals: Totals,
    pub history: Vec<RoundRecord>,
    pub am_trace: DecisionTrace,
    pub mc_trace: DecisionTrace,
    /// Pattern AM observed in MC's recent investments.
    pub am_pattern: OpponentPattern,
    /// Pattern MC observed in AM's recent investments.
    pub mc_pattern: OpponentPattern,
    /// True once this round used up the session's budget.
    pub finished: bool,
}

/// Result of [`GameSession::advance_round`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// No session has been started.
    NotRunning,
    /// The round budget is spent; nothing was played.
    Complete {
        history: Vec<RoundRecord>,
        totals: Totals,
    },
    Played(RoundReport),
}

impl RoundOutcome {
    pub fn report(&self) -> Option<&RoundReport> {
        match self {
            RoundOutcome::Played(report) => Some(report),
            _ => None,
        }
    }
}

impl GameSession {
    /// Play one round with learner-selected personas.
    pub async fn advance_round(&mut self) -> RoundOutcome {
        self.advance_round_with(RoundOptions::default()).await
    }

    /// Play one round.
    ///
    /// Both agents decide against the same finalized history. Payoffs,
    /// history, totals, personas and learner weights are committed only
    /// after both decisions are complete; dropping the future before that
    /// leaves the session as it was apart from RNG consumption.
    pub async fn advance_round_with(&mut self, options: RoundOptions) -> RoundOutcome {
        if !self.running {
            return RoundOutcome::NotRunning;
        }
        if self.round >= self.max_rounds {
            log::debug!("Session {} already complete", self.id);
            return RoundOutcome::Complete {
                history: self.history.records().to_vec(),
                totals: self.totals(),
            };
        }

        let round_number = self.round + 1;
        let am_persona = options
            .persona_for(AgentRole::Am)
            .unwrap_or_else(|| self.learner.select(AgentRole::Am, &mut self.rng));
        let mc_persona = options
            .persona_for(AgentRole::Mc)
            .unwrap_or_else(|| self.learner.select(AgentRole::Mc, &mut self.rng));

        let composer = DecisionComposer {
            table: &self.table,
            estimator: FutureValueEstimator::new(self.config.horizon, self.config.discount),
            oracle: self.oracle.as_ref(),
            advisory_timeout: self.config.advisory_timeout(),
            advisory_window: self.config.pattern_window,
        };
        let am_ctx = DecisionContext {
            role: AgentRole::Am,
            persona: am_persona,
            round_number,
            history: &self.history,
            modifiers: self.am.modifiers,
        };
        let mc_ctx = DecisionContext {
            role: AgentRole::Mc,
            persona: mc_persona,
            round_number,
            history: &self.history,
            modifiers: self.mc.modifiers,
        };
        let am_trace = composer.decide(&am_ctx, &mut self.rng).await;
        let mc_trace = composer.decide(&mc_ctx, &mut self.rng).await;

        let (am_payoff, mc_payoff) = self
            .table
            .lookup(am_trace.final_level, mc_trace.final_level);
        let record = RoundRecord {
            round_number,
            am_investment: am_trace.final_level,
            mc_investment: mc_trace.final_level,
            am_payoff,
            mc_payoff,
        };

        // Commit.
        self.history.push(record);
        self.round = round_number;
        self.am.persona = am_persona;
        self.mc.persona = mc_persona;
        self.am.total_payoff += am_payoff;
        self.mc.total_payoff += mc_payoff;

        let classifier = PatternClassifier::new(self.config.volatility_threshold);
        let window = self.config.pattern_window;
        let am_pattern = classifier.classify(&self.history.investments(AgentRole::Mc, window));
        let mc_pattern = classifier.classify(&self.history.investments(AgentRole::Am, window));
        self.learner.update(AgentRole::Am, am_pattern, am_payoff);
        self.learner.update(AgentRole::Mc, mc_pattern, mc_payoff);

        log::info!(
            "Round {}/{}: AM {} ({}) -> {}, MC {} ({}) -> {}",
            round_number,
            self.max_rounds,
            record.am_investment,
            am_persona,
            am_payoff,
            record.mc_investment,
            mc_persona,
            mc_payoff
        );

        RoundOutcome::Played(RoundReport {
            record,
            totals: self.totals(),
            history: self.history.records().to_vec(),
            am_trace,
            mc_trace,
            am_pattern,
            mc_pattern,
            finished: self.round >= self.max_rounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use async_trait::async_trait;

    use crate::advisory::{AdvisoryOracle, AdvisoryRequest, FixedAdvisor, NoAdvisor};
    use crate::config::EngineConfig;
    use crate::error::AdvisoryError;
    use crate::game::payoff::PayoffTable;
    use crate::game::types::is_valid_level;
    use crate::persona::BehaviorModifiers;

    fn seeded(seed: u64) -> GameSession {
        let config = EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        };
        GameSession::new(config, PayoffTable::standard(), Arc::new(NoAdvisor))
    }

    #[derive(Debug)]
    struct SleepyAdvisor;

    #[async_trait]
    impl AdvisoryOracle for SleepyAdvisor {
        fn name(&self) -> &str {
            "sleepy"
        }

        async fn suggest(&self, _request: &AdvisoryRequest) -> Result<Option<i32>, AdvisoryError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Some(25))
        }
    }

    #[tokio::test]
    async fn test_not_running_before_reset() {
        let mut session = seeded(1);
        assert_eq!(session.advance_round().await, RoundOutcome::NotRunning);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_three_round_game() {
        let mut session = seeded(7);
        session.reset_session(3);

        for n in 1..=3u32 {
            let outcome = session.advance_round().await;
            let report = outcome.report().expect("round should be played");
            assert_eq!(report.record.round_number, n);
            assert_eq!(report.history.len(), n as usize);
            assert!(is_valid_level(report.record.am_investment));
            assert!(is_valid_level(report.record.mc_investment));
            let expected = session
                .table()
                .lookup(report.record.am_investment, report.record.mc_investment);
            assert_eq!((report.record.am_payoff, report.record.mc_payoff), expected);
            assert_eq!(report.finished, n == 3);
        }

        let sum_am: i64 = session.history().records().iter().map(|r| r.am_payoff).sum();
        let sum_mc: i64 = session.history().records().iter().map(|r| r.mc_payoff).sum();
        assert_eq!(session.totals(), Totals { am: sum_am, mc: sum_mc });
        for role in AgentRole::ALL {
            assert!((session.persona_weights(role).sum() - 1.0).abs() < 1e-9);
        }

        let before = session.snapshot();
        match session.advance_round().await {
            RoundOutcome::Complete { history, totals } => {
                assert_eq!(history.len(), 3);
                assert_eq!(totals, before.totals);
            }
            other => panic!("expected Complete, got {:?}", other),
        }
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.persona_weights(AgentRole::Am), &before.am.weights);
    }

    #[tokio::test]
    async fn test_seeded_sessions_replay_identically() {
        let mut a = seeded(4242);
        let mut b = seeded(4242);
        a.reset_session(6);
        b.reset_session(6);
        for _ in 0..6 {
            a.advance_round().await;
            b.advance_round().await;
        }
        assert_eq!(a.history(), b.history());

        // Reset re-seeds.
        let first = a.history().clone();
        a.reset_session(6);
        for _ in 0..6 {
            a.advance_round().await;
        }
        assert_eq!(a.history(), &first);
    }

    #[tokio::test]
    async fn test_persona_override() {
        let mut session = seeded(3);
        session.reset_session(2);
        let options = RoundOptions {
            am_persona: Some(Persona::Competitive),
            mc_persona: Some(Persona::Cooperative),
        };
        let outcome = session.advance_round_with(options).await;
        let report = outcome.report().unwrap();
        assert_eq!(report.am_trace.persona, Persona::Competitive);
        assert_eq!(report.mc_trace.persona, Persona::Cooperative);
        assert!((5..=10).contains(&report.am_trace.baseline));
        assert!((15..=17).contains(&report.mc_trace.baseline));
        assert_eq!(session.agent(AgentRole::Am).persona, Persona::Competitive);
    }

    #[tokio::test]
    async fn test_modifiers_shape_committed_investment() {
        let mut session = seeded(11);
        session.reset_session(1);
        session.set_behavior_modifiers(
            AgentRole::Mc,
            BehaviorModifiers {
                trust_factor: 0.0,
                ..BehaviorModifiers::neutral()
            },
        );
        let outcome = session.advance_round().await;
        let report = outcome.report().unwrap();
        assert_eq!(report.record.mc_investment, 0);
        assert_eq!(report.mc_trace.final_level, 0);
    }

    #[tokio::test]
    async fn test_slow_advisor_does_not_abort_round() {
        let config = EngineConfig {
            seed: Some(5),
            advisory_timeout_ms: 50,
            ..EngineConfig::default()
        };
        let mut session =
            GameSession::new(config, PayoffTable::standard(), Arc::new(SleepyAdvisor));
        session.reset_session(1);

        let started = Instant::now();
        let outcome = session.advance_round().await;
        assert!(started.elapsed() < Duration::from_secs(5));
        let report = outcome.report().unwrap();
        assert_eq!(report.am_trace.advisory, None);
        assert_eq!(report.mc_trace.advisory, None);
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn test_advisory_suggestion_reaches_trace() {
        let mut session = seeded(8).with_oracle(Arc::new(FixedAdvisor::uniform(20)));
        session.reset_session(1);
        let outcome = session.advance_round().await;
        let report = outcome.report().unwrap();
        assert_eq!(report.am_trace.advisory, Some(20));
        assert!(report.am_trace.candidates.iter().any(|c| c.level == 20));
    }

    #[tokio::test]
    async fn test_zero_round_session_is_immediately_complete() {
        let mut session = seeded(2);
        session.reset_session(0);
        assert!(matches!(
            session.advance_round().await,
            RoundOutcome::Complete { .. }
        ));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(RoundOutcome::NotRunning).unwrap();
        assert_eq!(json["status"], "not_running");
    }
}
