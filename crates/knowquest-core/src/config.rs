//! Thresholds, weights and rewards

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Detection debouncing thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Observations at or below this confidence are ignored
    pub confidence_threshold: f64,

    /// Qualifying sightings needed before a label counts as discovered
    pub repeat_threshold: u32,

    /// Seconds without a counted sighting before pending counts are dropped
    pub idle_window_secs: f64,
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self {
            confidence_threshold: 0.6,
            repeat_threshold: 2,
            idle_window_secs: 5.0,
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Weights of the combined recommendation score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub completion: f64,
    pub performance: f64,
    pub efficiency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completion: 0.3,
            performance: 0.5,
            efficiency: 0.2,
        }
    }
}

/// Style recommendation scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Categories with fewer completions are not ranked
    pub min_completions: u32,

    /// Completion count at which the completion sub-score saturates
    pub completion_target: f64,

    /// Average seconds per completion at which efficiency reaches zero
    pub reference_secs: f64,

    pub weights: ScoreWeights,

    /// Confidence reported when no category has enough data
    pub fallback_confidence: f64,
}

impl ScorerConfig {
    pub fn new() -> Self {
        Self {
            min_completions: 2,
            completion_target: 10.0,
            reference_secs: 1800.0,
            weights: ScoreWeights::default(),
            fallback_confidence: 0.5,
        }
    }
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Points handed out by sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    pub points_per_discovery: u64,

    /// Discoveries per hunt that earn points
    pub discovery_goal: usize,

    pub points_per_completion: u64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            points_per_discovery: 10,
            discovery_goal: 5,
            points_per_completion: 20,
        }
    }
}

/// Full configuration, loadable from a partial JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detector: DetectorConfig,
    pub scorer: ScorerConfig,
    pub rewards: RewardConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from `path`; fields absent from the file keep their defaults
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Config::from_file`], falling back to defaults when the file is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }

        match Self::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
                Self::new()
            }
        }
    }
}
