//! Opponent-pattern classification over a short window of investments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default number of recent opponent moves examined.
pub const DEFAULT_WINDOW: usize = 5;

/// Default mean absolute step above which a non-trending window is unstable.
pub const DEFAULT_VOLATILITY_THRESHOLD: f64 = 4.5;

/// Fewest samples (two successive differences) that can be classified.
pub const MIN_SAMPLES: usize = 3;

/// Mean step magnitude that counts as a trend.
const TREND_STEP: f64 = 1.5;

/// Minimum share of the absolute movement the net drift must explain
/// before a window counts as trending.
const TREND_CONSISTENCY: f64 = 0.5;

/// Coarse shape of the opponent's recent behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentPattern {
    Unknown,
    Increasing,
    Decreasing,
    Unstable,
    Flat,
}

impl fmt::Display for OpponentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpponentPattern::Unknown => "unknown",
            OpponentPattern::Increasing => "increasing",
            OpponentPattern::Decreasing => "decreasing",
            OpponentPattern::Unstable => "unstable",
            OpponentPattern::Flat => "flat",
        };
        f.write_str(s)
    }
}

/// Step statistics for a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    /// Mean of successive differences.
    pub avg: f64,
    /// Mean of absolute successive differences.
    pub volatility: f64,
}

impl WindowStats {
    /// `None` when fewer than two samples are available.
    pub fn of(window: &[i32]) -> Option<Self> {
        if window.len() < 2 {
            return None;
        }
        let diffs: Vec<f64> = window.windows(2).map(|w| (w[1] - w[0]) as f64).collect();
        let n = diffs.len() as f64;
        Some(Self {
            avg: diffs.iter().sum::<f64>() / n,
            volatility: diffs.iter().map(|d| d.abs()).sum::<f64>() / n,
        })
    }

    fn is_consistent(&self) -> bool {
        self.avg.abs() >= TREND_CONSISTENCY * self.volatility
    }
}

/// Classifier with a configurable volatility threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternClassifier {
    pub volatility_threshold: f64,
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self {
            volatility_threshold: DEFAULT_VOLATILITY_THRESHOLD,
        }
    }
}

impl PatternClassifier {
    pub fn new(volatility_threshold: f64) -> Self {
        Self {
            volatility_threshold,
        }
    }

    /// Classify a window of opponent investments, oldest first.
    ///
    /// Windows shorter than [`MIN_SAMPLES`] are `Unknown`: a single step
    /// says nothing about trend or volatility.
    ///
    /// Rules are checked in order and the first match wins: rising trend,
    /// falling trend, unstable, flat. A trend must also be consistent (net
    /// drift at least half the absolute movement); a consistent trend is
    /// reported even when the window is also volatile.
    pub fn classify(&self, window: &[i32]) -> OpponentPattern {
        if window.len() < MIN_SAMPLES {
            return OpponentPattern::Unknown;
        }
        let Some(stats) = WindowStats::of(window) else {
            return OpponentPattern::Unknown;
        };
        if stats.avg > TREND_STEP && stats.is_consistent() {
            OpponentPattern::Increasing
        } else if stats.avg < -TREND_STEP && stats.is_consistent() {
            OpponentPattern::Decreasing
        } else if stats.volatility > self.volatility_threshold {
            OpponentPattern::Unstable
        } else {
            OpponentPattern::Flat
        }
    }
}

/// Classify with the default threshold.
pub fn classify(window: &[i32]) -> OpponentPattern {
    PatternClassifier::default().classify(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_windows() {
        assert_eq!(classify(&[12, 12]), OpponentPattern::Unknown);
        assert_eq!(classify(&[10, 12, 14, 16]), OpponentPattern::Increasing);
        assert_eq!(classify(&[16, 14, 12, 10]), OpponentPattern::Decreasing);
        assert_eq!(classify(&[10, 20, 5, 22]), OpponentPattern::Unstable);
        assert_eq!(classify(&[12, 13, 11, 12]), OpponentPattern::Flat);
    }

    #[test]
    fn test_too_short_is_unknown() {
        assert_eq!(classify(&[]), OpponentPattern::Unknown);
        assert_eq!(classify(&[12]), OpponentPattern::Unknown);
        assert_eq!(classify(&[3, 20]), OpponentPattern::Unknown);
        assert_eq!(classify(&[12, 12, 12]), OpponentPattern::Flat);
    }

    #[test]
    fn test_trend_dominates_volatility() {
        // avg ≈ 8.3 and volatility ≈ 8.3: both rules apply, trend wins.
        assert_eq!(classify(&[0, 10, 20, 25]), OpponentPattern::Increasing);
        assert_eq!(classify(&[25, 15, 5, 0]), OpponentPattern::Decreasing);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let window = [10, 14, 10, 14];
        assert_eq!(PatternClassifier::new(4.5).classify(&window), OpponentPattern::Flat);
        assert_eq!(PatternClassifier::new(3.0).classify(&window), OpponentPattern::Unstable);
    }

    #[test]
    fn test_window_stats() {
        let stats = WindowStats::of(&[10, 20, 5, 22]).unwrap();
        assert!((stats.avg - 4.0).abs() < 1e-9);
        assert!((stats.volatility - 14.0).abs() < 1e-9);
    }
}
