//! Core types for detection and recommendation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One classifier output for a sampled frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub label: String,
    pub confidence: f64,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Observation {
    pub fn new(label: impl Into<String>, confidence: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            confidence,
            timestamp,
        }
    }
}

/// Non-blank label and a confidence inside [0, 1]
pub(crate) fn is_well_formed(label: &str, confidence: f64) -> bool {
    !label.trim().is_empty() && (0.0..=1.0).contains(&confidence)
}

/// Per-session detection bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionState {
    /// Qualifying sightings of labels not yet discovered
    pub seen_counts: HashMap<String, u32>,
    /// Labels confirmed this session; only ever grows
    pub discovered: HashSet<String>,
    /// Time of the last sighting that changed state
    pub last_reset_time: DateTime<Utc>,
}

impl DetectionState {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            seen_counts: HashMap::new(),
            discovered: HashSet::new(),
            last_reset_time: started_at,
        }
    }

    pub fn is_discovered(&self, label: &str) -> bool {
        self.discovered.contains(label)
    }

    pub fn seen_count(&self, label: &str) -> u32 {
        self.seen_counts.get(label).copied().unwrap_or(0)
    }
}

/// A label crossing from "seen" into "found"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovered {
    pub label: String,
}

/// Best-matching learning-style category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category_id: String,
    /// 0.0-1.0
    pub confidence: f64,
}
