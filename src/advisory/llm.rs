//! Chat-completions backed advisory oracle.
//!
//! Sends the round history to an OpenAI-compatible `/chat/completions`
//! endpoint and reads the first integer in the reply as the suggestion.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::oracle::{AdvisoryOracle, AdvisoryRequest};
use crate::config::AdvisorConfig;
use crate::error::AdvisoryError;
use crate::game::types::{clamp_level, MAX_LEVEL, MIN_LEVEL};

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").expect("static regex"));

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Advisory oracle backed by a chat model.
#[derive(Debug, Clone)]
pub struct LlmAdvisor {
    pub model: String,
    pub base_url: String,
    api_key: String,
    /// Client-side request timeout; the engine applies its own bound too.
    pub timeout: Duration,
    client: reqwest::Client,
}

impl LlmAdvisor {
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, AdvisoryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            model: model.into(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.into(),
            timeout,
            client,
        })
    }

    /// Build from config, reading the API key from the configured variable.
    pub fn from_config(config: &AdvisorConfig, timeout: Duration) -> Result<Self, AdvisoryError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            AdvisoryError::Unconfigured(format!("{} is not set", config.api_key_env))
        })?;
        Self::new(config.model.clone(), api_key, config.base_url.clone(), timeout)
    }

    /// Chat completions request body for `request`.
    pub fn build_request_body(&self, request: &AdvisoryRequest) -> Value {
        serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": build_prompt(request)}],
        })
    }
}

#[async_trait]
impl AdvisoryOracle for LlmAdvisor {
    fn name(&self) -> &str {
        &self.model
    }

    async fn suggest(&self, request: &AdvisoryRequest) -> Result<Option<i32>, AdvisoryError> {
        let endpoint = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.build_request_body(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AdvisoryError::Http {
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let json: Value =
            serde_json::from_str(&body).map_err(|e| AdvisoryError::Parse(e.to_string()))?;
        let content = json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| AdvisoryError::Parse("no message content in reply".to_string()))?;

        parse_suggestion(content).map(Some)
    }
}

/// Prompt describing the game state to the model.
pub fn build_prompt(request: &AdvisoryRequest) -> String {
    let history = if request.history_window.is_empty() {
        "(no previous rounds)".to_string()
    } else {
        request
            .history_window
            .iter()
            .map(|r| {
                format!(
                    "Round {}: AM={}, MC={}, AM_pay={}, MC_pay={}",
                    r.round_number, r.am_investment, r.mc_investment, r.am_payoff, r.mc_payoff
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    let me = request.role.as_str().to_uppercase();
    let opponent = request.role.opponent().as_str().to_uppercase();

    format!(
        "You are the {me} agent in a repeated investment game.\n\
         Each round both sides choose an investment between {MIN_LEVEL} and {MAX_LEVEL}.\n\
         Higher investment can help long-term competitiveness but also costs more.\n\
         The opponent is '{opponent}'.\n\n\
         History so far:\n{history}\n\n\
         Now we are entering round {round}.\n\
         Choose ONE integer between {MIN_LEVEL} and {MAX_LEVEL} as your next {me} investment.\n\
         Return ONLY the number, no explanation.",
        round = request.round_number,
    )
}

/// First integer in `text`, clamped to `[0, 25]`.
pub fn parse_suggestion(text: &str) -> Result<i32, AdvisoryError> {
    let m = INTEGER
        .find(text)
        .ok_or_else(|| AdvisoryError::Parse(format!("no integer in reply '{}'", text.trim())))?;
    let value: i64 = m
        .as_str()
        .parse()
        .map_err(|e: std::num::ParseIntError| AdvisoryError::Parse(e.to_string()))?;
    Ok(clamp_level(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{AgentRole, RoundRecord};

    fn request() -> AdvisoryRequest {
        AdvisoryRequest {
            role: AgentRole::Mc,
            round_number: 3,
            opponent_last_move: Some(14),
            history_window: vec![RoundRecord {
                round_number: 2,
                am_investment: 14,
                mc_investment: 9,
                am_payoff: 120,
                mc_payoff: 80,
            }],
        }
    }

    #[test]
    fn test_parse_suggestion() {
        assert_eq!(parse_suggestion("17").unwrap(), 17);
        assert_eq!(parse_suggestion("I would invest 8 engineers.").unwrap(), 8);
        assert_eq!(parse_suggestion("40").unwrap(), 25);
        assert_eq!(parse_suggestion("-3").unwrap(), 0);
        assert!(matches!(parse_suggestion("none"), Err(AdvisoryError::Parse(_))));
    }

    #[test]
    fn test_huge_number_is_parse_error() {
        assert!(parse_suggestion("99999999999999999999999").is_err());
    }

    #[test]
    fn test_prompt_mentions_role_and_history() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("You are the MC agent"));
        assert!(prompt.contains("The opponent is 'AM'"));
        assert!(prompt.contains("Round 2: AM=14, MC=9"));
        assert!(prompt.contains("entering round 3"));
    }

    #[test]
    fn test_request_body_shape() {
        let advisor =
            LlmAdvisor::new("gpt-4o-mini", "sk-test", None, Duration::from_secs(1)).unwrap();
        let body = advisor.build_request_body(&request());
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(advisor.base_url, "https://api.openai.com/v1");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        let advisor = LlmAdvisor::new(
            "gpt-4o-mini",
            "sk-test",
            Some("http://127.0.0.1:9".to_string()),
            Duration::from_millis(200),
        )
        .unwrap();
        assert!(advisor.suggest(&request()).await.is_err());
    }

    #[test]
    fn test_from_config_without_key_is_unconfigured() {
        let config = AdvisorConfig {
            api_key_env: "INVESTMENT_GAME_TEST_MISSING_KEY".to_string(),
            ..AdvisorConfig::default()
        };
        let err = LlmAdvisor::from_config(&config, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, AdvisoryError::Unconfigured(_)));
    }
}
