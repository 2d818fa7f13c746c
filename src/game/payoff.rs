//! Payoff table: immutable lookup of `(am_level, mc_level) → (am_payoff, mc_payoff)`.
//!
//! Two 26×26 matrices (AM view, MC view) indexed `[am_level][mc_level]`.
//! Stored values are floats; lookups truncate them to integers. Inputs
//! outside `[0, 25]` are clamped first. A cell that cannot be read falls
//! back to the symmetric linear proxy `2 * (am + mc)` for both sides, so
//! `lookup` always yields a result.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::payoff_data::{AM_VIEW, MC_VIEW};
use super::types::{clamp_level, AgentRole, LEVELS};
use crate::error::{ConfigError, TableLookupError};

/// Raw matrices as they appear in a YAML override file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffMatrices {
    pub am: Vec<Vec<f64>>,
    pub mc: Vec<Vec<f64>>,
}

/// Fixed payoff lookup for both agents.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffTable {
    am: Vec<Vec<f64>>,
    mc: Vec<Vec<f64>>,
}

impl Default for PayoffTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl PayoffTable {
    /// The built-in matrices used by the game.
    pub fn standard() -> Self {
        Self {
            am: AM_VIEW.iter().map(|row| row.to_vec()).collect(),
            mc: MC_VIEW.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// Build a table from caller-supplied matrices.
    ///
    /// Both matrices must be exactly 26×26. Cell values are not checked here;
    /// non-finite cells are handled by the lookup fallback.
    pub fn from_matrices(matrices: PayoffMatrices) -> Result<Self, TableLookupError> {
        check_shape("am", &matrices.am)?;
        check_shape("mc", &matrices.mc)?;
        Ok(Self {
            am: matrices.am,
            mc: matrices.mc,
        })
    }

    /// Load a table override from a YAML file with `am` and `mc` keys.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let matrices: PayoffMatrices = serde_yaml::from_str(&raw)?;
        Ok(Self::from_matrices(matrices)?)
    }

    /// Strict lookup. Clamps both levels, then reads and truncates the cells.
    pub fn try_lookup(&self, am_level: i32, mc_level: i32) -> Result<(i64, i64), TableLookupError> {
        let am_level = clamp_level(am_level as i64);
        let mc_level = clamp_level(mc_level as i64);
        let am = read_cell(&self.am, am_level, mc_level)?;
        let mc = read_cell(&self.mc, am_level, mc_level)?;
        Ok((am.trunc() as i64, mc.trunc() as i64))
    }

    /// Total lookup: `(am_payoff, mc_payoff)` for the clamped pair, or the
    /// linear proxy when the stored cell is unusable.
    pub fn lookup(&self, am_level: i32, mc_level: i32) -> (i64, i64) {
        match self.try_lookup(am_level, mc_level) {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("Payoff lookup failed, using linear fallback: {}", e);
                linear_fallback(am_level, mc_level)
            }
        }
    }

    /// Payoff seen by `role` when it plays `own_level` against `opponent_level`.
    pub fn payoff_for(&self, role: AgentRole, own_level: i32, opponent_level: i32) -> i64 {
        match role {
            AgentRole::Am => self.lookup(own_level, opponent_level).0,
            AgentRole::Mc => self.lookup(opponent_level, own_level).1,
        }
    }
}

/// Symmetric proxy used when a cell cannot be read.
pub fn linear_fallback(am_level: i32, mc_level: i32) -> (i64, i64) {
    let am_level = clamp_level(am_level as i64) as i64;
    let mc_level = clamp_level(mc_level as i64) as i64;
    let value = 2 * (am_level + mc_level);
    (value, value)
}

fn check_shape(matrix: &'static str, rows: &[Vec<f64>]) -> Result<(), TableLookupError> {
    if rows.len() != LEVELS {
        return Err(TableLookupError::Shape {
            matrix,
            detail: format!("expected {} rows, found {}", LEVELS, rows.len()),
        });
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != LEVELS) {
        return Err(TableLookupError::Shape {
            matrix,
            detail: format!("row {} has {} columns, expected {}", i, row.len(), LEVELS),
        });
    }
    Ok(())
}

fn read_cell(rows: &[Vec<f64>], am_level: i32, mc_level: i32) -> Result<f64, TableLookupError> {
    let value = rows
        .get(am_level as usize)
        .and_then(|row| row.get(mc_level as usize))
        .copied()
        .ok_or(TableLookupError::Missing { am_level, mc_level })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TableLookupError::NonFinite { am_level, mc_level })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn uniform(value: f64) -> Vec<Vec<f64>> {
        vec![vec![value; LEVELS]; LEVELS]
    }

    #[test]
    fn test_standard_known_cells() {
        let table = PayoffTable::standard();
        assert_eq!(table.lookup(0, 0), (0, 0));
        assert_eq!(table.lookup(1, 0), (-1, 0));
        assert_eq!(table.lookup(12, 12), (327, 290));
        assert_eq!(table.lookup(0, 3), (0, -9));
    }

    #[test]
    fn test_lookup_is_deterministic_over_full_grid() {
        let table = PayoffTable::standard();
        for am in 0..=25 {
            for mc in 0..=25 {
                assert_eq!(table.lookup(am, mc), table.lookup(am, mc));
                assert!(table.try_lookup(am, mc).is_ok());
            }
        }
    }

    #[test]
    fn test_out_of_range_clamps_to_boundary() {
        let table = PayoffTable::standard();
        assert_eq!(table.lookup(-5, 40), table.lookup(0, 25));
        assert_eq!(table.lookup(99, -1), table.lookup(25, 0));
        assert_eq!(table.lookup(i32::MIN, i32::MAX), table.lookup(0, 25));
    }

    #[test]
    fn test_payoff_for_respects_role_orientation() {
        let table = PayoffTable::standard();
        assert_eq!(table.payoff_for(AgentRole::Am, 5, 7), table.lookup(5, 7).0);
        assert_eq!(table.payoff_for(AgentRole::Mc, 5, 7), table.lookup(7, 5).1);
    }

    #[test]
    fn test_non_finite_cell_uses_linear_fallback() {
        let mut am = uniform(1.0);
        am[3][4] = f64::NAN;
        let table = PayoffTable::from_matrices(PayoffMatrices { am, mc: uniform(1.0) }).unwrap();
        assert_eq!(
            table.try_lookup(3, 4),
            Err(TableLookupError::NonFinite { am_level: 3, mc_level: 4 })
        );
        assert_eq!(table.lookup(3, 4), (14, 14));
        assert_eq!(table.lookup(3, 5), (1, 1));
    }

    #[test]
    fn test_truncates_stored_values() {
        let table = PayoffTable::from_matrices(PayoffMatrices {
            am: uniform(7.9),
            mc: uniform(-2.7),
        })
        .unwrap();
        assert_eq!(table.lookup(10, 10), (7, -2));
    }

    #[test]
    fn test_from_matrices_rejects_bad_shape() {
        let mut short_row = uniform(0.0);
        short_row[10].pop();
        let err = PayoffTable::from_matrices(PayoffMatrices {
            am: uniform(0.0),
            mc: short_row,
        })
        .unwrap_err();
        assert!(matches!(err, TableLookupError::Shape { matrix: "mc", .. }));

        let err = PayoffTable::from_matrices(PayoffMatrices {
            am: vec![vec![0.0; LEVELS]; 3],
            mc: uniform(0.0),
        })
        .unwrap_err();
        assert!(err.to_string().contains("expected 26 rows"));
    }

    #[test]
    fn test_yaml_override_roundtrip() {
        let matrices = PayoffMatrices {
            am: uniform(3.0),
            mc: uniform(4.0),
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_yaml::to_string(&matrices).unwrap().as_bytes())
            .unwrap();

        let table = PayoffTable::from_yaml_file(file.path()).unwrap();
        assert_eq!(table.lookup(25, 25), (3, 4));
    }

    #[test]
    fn test_linear_fallback_clamps() {
        assert_eq!(linear_fallback(30, -3), (50, 50));
    }
}
