//! Per-persona baseline heuristics.
//!
//! Each persona turns the previous round's moves into a candidate level.
//! Jitter is drawn from the caller's RNG, the only source of randomness in
//! a decision.

use rand::Rng;

use super::profile::Persona;
use crate::game::types::clamp_level;

/// Baseline used for persona names outside the known set.
pub const FALLBACK_BASELINE: i32 = 12;

/// Round-one seed for the tit-for-tat persona.
pub const ADAPTIVE_OPENING: i32 = 13;

const COOPERATIVE_FLOOR: i32 = 15;
const BALANCED_FLOOR: i32 = 5;
const BALANCED_NEUTRAL: i32 = 12;
const COMPETITIVE_RANGE: (i32, i32) = (5, 10);

/// What a persona sees when forming its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineInputs {
    pub round_number: u32,
    pub my_last: Option<i32>,
    pub opp_last: Option<i32>,
}

impl Persona {
    /// Candidate level for this persona, clamped to `[0, 25]`.
    pub fn baseline<R: Rng>(self, inputs: &BaselineInputs, rng: &mut R) -> i32 {
        let raw = match self {
            Persona::Cooperative => {
                // Option ordering puts None below any Some.
                let anchor = inputs
                    .my_last
                    .max(inputs.opp_last)
                    .unwrap_or(COOPERATIVE_FLOOR);
                (anchor + rng.gen_range(0..=2)).max(COOPERATIVE_FLOOR)
            }
            Persona::Competitive => rng.gen_range(COMPETITIVE_RANGE.0..=COMPETITIVE_RANGE.1),
            Persona::Adaptive => match inputs.opp_last {
                Some(opp) if inputs.round_number > 1 => opp,
                _ => ADAPTIVE_OPENING,
            },
            Persona::Balanced => {
                let mid = match (inputs.my_last, inputs.opp_last) {
                    (Some(mine), Some(theirs)) => (mine + theirs).div_euclid(2),
                    (Some(only), None) | (None, Some(only)) => only,
                    (None, None) => BALANCED_NEUTRAL,
                };
                (mid + rng.gen_range(-2..=2)).max(BALANCED_FLOOR)
            }
        };
        clamp_level(raw as i64)
    }
}

/// Name-based dispatch for external callers holding a free-form persona
/// label.
///
/// The engine itself never calls this: sessions and the HTTP layer work
/// with the closed [`Persona`] enum and reject unknown names. Unknown
/// names here get [`FALLBACK_BASELINE`].
pub fn baseline_by_name<R: Rng>(name: &str, inputs: &BaselineInputs, rng: &mut R) -> i32 {
    match name.parse::<Persona>() {
        Ok(persona) => persona.baseline(inputs, rng),
        Err(e) => {
            log::debug!("{}; using fallback baseline {}", e, FALLBACK_BASELINE);
            FALLBACK_BASELINE
        }
    }
}
