//! Turns noisy classifier output into de-duplicated discoveries

use crate::config::DetectorConfig;
use crate::types::{is_well_formed, DetectionState, Discovered, Observation};
use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone)]
pub struct Debouncer {
    config: DetectorConfig,
    state: DetectionState,
}

impl Debouncer {
    pub fn new(config: DetectorConfig) -> Self {
        Self::starting_at(config, Utc::now())
    }

    /// Session whose idle clock starts at `started_at`
    pub fn starting_at(config: DetectorConfig, started_at: DateTime<Utc>) -> Self {
        Self {
            config,
            state: DetectionState::new(started_at),
        }
    }

    pub fn state(&self) -> &DetectionState {
        &self.state
    }

    /// Observe a label sighted now
    pub fn observe(&mut self, label: &str, confidence: f64) -> Option<Discovered> {
        self.observe_at(label, confidence, Utc::now())
    }

    pub fn feed(&mut self, observation: &Observation) -> Option<Discovered> {
        self.observe_at(
            &observation.label,
            observation.confidence,
            observation.timestamp,
        )
    }

    /// Count a sighting at `at`, returning the discovery it completes, if any.
    ///
    /// Malformed, low-confidence and already-discovered sightings leave the
    /// state untouched. Labels are keyed with surrounding whitespace removed.
    pub fn observe_at(
        &mut self,
        label: &str,
        confidence: f64,
        at: DateTime<Utc>,
    ) -> Option<Discovered> {
        if !is_well_formed(label, confidence) {
            tracing::trace!(label, confidence, "dropping malformed observation");
            return None;
        }
        let label = label.trim();
        if confidence <= self.config.confidence_threshold {
            return None;
        }
        if self.state.is_discovered(label) {
            return None;
        }

        self.decay(at);

        let count = self.state.seen_counts.entry(label.to_string()).or_insert(0);
        *count += 1;
        let count = *count;
        self.state.last_reset_time = self.state.last_reset_time.max(at);

        if count < self.config.repeat_threshold.max(1) {
            return None;
        }

        self.state.seen_counts.remove(label);
        self.state.discovered.insert(label.to_string());
        tracing::debug!(label, sightings = count, "discovered");

        Some(Discovered {
            label: label.to_string(),
        })
    }

    /// Drop pending counts once the idle window has passed; returns whether anything was cleared
    pub fn decay(&mut self, now: DateTime<Utc>) -> bool {
        let idle = now.signed_duration_since(self.state.last_reset_time);

        if idle <= self.idle_window() || self.state.seen_counts.is_empty() {
            return false;
        }

        tracing::debug!(
            pending = self.state.seen_counts.len(),
            idle = %idle,
            "clearing stale sightings"
        );
        self.state.seen_counts.clear();
        true
    }

    fn idle_window(&self) -> TimeDelta {
        // `as` saturates on overflow
        TimeDelta::nanoseconds((self.config.idle_window_secs * 1e9).round() as i64)
    }

    pub fn discovered_count(&self) -> usize {
        self.state.discovered.len()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
