//! Persona archetypes and their display profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePersonaError;

/// Decision archetype governing an agent's baseline investment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Invests ahead of the opponent, expecting reciprocity.
    Cooperative,
    /// Keeps investment lean regardless of history.
    Competitive,
    /// Tit-for-tat: mirrors the opponent's last move.
    Adaptive,
    /// Stays near the midpoint of both last moves.
    #[default]
    Balanced,
}

impl Persona {
    /// All personas in canonical (weight-vector) order.
    pub const ALL: [Persona; 4] = [
        Persona::Cooperative,
        Persona::Competitive,
        Persona::Adaptive,
        Persona::Balanced,
    ];

    /// Position of this persona in [`Persona::ALL`].
    pub fn index(self) -> usize {
        match self {
            Persona::Cooperative => 0,
            Persona::Competitive => 1,
            Persona::Adaptive => 2,
            Persona::Balanced => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Persona::Cooperative => "cooperative",
            Persona::Competitive => "competitive",
            Persona::Adaptive => "adaptive",
            Persona::Balanced => "balanced",
        }
    }

    /// Display profile for this persona.
    pub fn profile(self) -> PersonaProfile {
        match self {
            Persona::Cooperative => PersonaProfile {
                name: "Visionary Builder",
                style: "long-term partnership, high trust, willing to invest ahead",
            },
            Persona::Competitive => PersonaProfile {
                name: "Hard-nosed Fighter",
                style: "short-term payoff, defensive, protects downside first",
            },
            Persona::Adaptive => PersonaProfile {
                name: "Opportunistic Learner",
                style: "reads opponent signals and tweaks investment dynamically",
            },
            Persona::Balanced => PersonaProfile {
                name: "Pragmatic Optimizer",
                style: "weighs both upside and risk, stays in the middle lane",
            },
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = ParsePersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Persona::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or(ParsePersonaError(wanted))
    }
}

/// Human-facing name and style line for a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaProfile {
    pub name: &'static str,
    pub style: &'static str,
}
