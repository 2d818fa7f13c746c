//! Personas: decision archetypes, their baseline heuristics, and the
//! behavior modifiers applied after a decision.
//!
//! # Architecture
//!
//! ```text
//! Persona (4 variants, closed)
//!   ↓  baseline(inputs, rng)
//! candidate level  ──▶  DecisionComposer  ──▶  BehaviorModifiers::apply
//! ```
//!
//! Name-based callers go through [`baseline_by_name`], which keeps the
//! enumeration open by mapping unknown labels to a fixed fallback.

pub mod heuristic;
pub mod modifiers;
pub mod profile;

pub use heuristic::{baseline_by_name, BaselineInputs, ADAPTIVE_OPENING, FALLBACK_BASELINE};
pub use modifiers::BehaviorModifiers;
pub use profile::{Persona, PersonaProfile};
