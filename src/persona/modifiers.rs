//! Behavior modifiers: externally supplied post-decision adjustments.
//!
//! The values come from a natural-language interpretation service outside
//! this crate; the engine only stores and applies them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModifierError;
use crate::game::types::clamp_level;

/// Post-decision adjustments for one agent.
///
/// Applied in fixed order: `+aggression`, `+cooperation_bias`,
/// `×trust_factor` (truncated toward zero), `+investment_shift`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BehaviorModifiers {
    #[serde(default)]
    pub aggression: i32,
    #[serde(default)]
    pub cooperation_bias: i32,
    #[serde(default = "neutral_trust")]
    pub trust_factor: f64,
    #[serde(default)]
    pub investment_shift: i32,
}

fn neutral_trust() -> f64 {
    1.0
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Default for BehaviorModifiers {
    fn default() -> Self {
        Self::neutral()
    }
}

impl BehaviorModifiers {
    /// `{0, 0, 1.0, 0}`: leaves any level unchanged.
    pub const fn neutral() -> Self {
        Self {
            aggression: 0,
            cooperation_bias: 0,
            trust_factor: 1.0,
            investment_shift: 0,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Parse a JSON payload from the interpretation service.
    ///
    /// Only a JSON object is accepted. Missing fields take their neutral
    /// value; unknown fields, wrong types and a non-finite trust factor are
    /// rejected.
    pub fn from_payload(payload: &Value) -> Result<Self, ModifierError> {
        if !payload.is_object() {
            return Err(ModifierError::NotAnObject(json_kind(payload)));
        }
        let modifiers: BehaviorModifiers = serde_json::from_value(payload.clone())?;
        if !modifiers.trust_factor.is_finite() {
            return Err(ModifierError::Field {
                field: "trust_factor",
                reason: format!("{} is not finite", modifiers.trust_factor),
            });
        }
        Ok(modifiers)
    }

    /// Like [`from_payload`](Self::from_payload), substituting neutral
    /// modifiers for anything malformed. The flag reports a substitution.
    pub fn from_payload_or_neutral(payload: &Value) -> (Self, bool) {
        match Self::from_payload(payload) {
            Ok(m) => (m, false),
            Err(e) => {
                log::warn!("{}; substituting neutral modifiers", e);
                (Self::neutral(), true)
            }
        }
    }

    /// Apply to `level` and clamp the result to `[0, 25]`.
    ///
    /// Arithmetic is done in `f64` so extreme inputs saturate instead of
    /// overflowing; a NaN product truncates to zero.
    pub fn apply(&self, level: i32) -> i32 {
        let shifted = level as f64 + self.aggression as f64 + self.cooperation_bias as f64;
        let scaled = (shifted * self.trust_factor).trunc() as i64;
        clamp_level(scaled.saturating_add(self.investment_shift as i64))
    }
}
