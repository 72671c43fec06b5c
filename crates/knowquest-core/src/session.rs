//! Hunt sessions and progress bookkeeping on top of a `ProgressStore`

use crate::classifier::Classifier;
use crate::config::{Config, RewardConfig, ScorerConfig};
use crate::debouncer::Debouncer;
use crate::scorer::recommend;
use crate::types::{Observation, Recommendation};
use chrono::{DateTime, NaiveDate, Utc};
use knowquest_store::{CompletionRecord, Progress, ProgressStore, StoreError};
use serde::{Deserialize, Serialize};

/// A discovery as seen by the UI: what was found and what it earned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuntEvent {
    pub label: String,
    pub points_awarded: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuntSummary {
    /// Labels in discovery order
    pub discovered: Vec<String>,
    pub points: u64,
    pub goal: usize,
    pub goal_met: bool,
}

/// One AR scavenger hunt
#[derive(Debug)]
pub struct HuntSession {
    debouncer: Debouncer,
    rewards: RewardConfig,
    found: Vec<String>,
    points: u64,
}

impl HuntSession {
    pub fn new(config: &Config, started_at: DateTime<Utc>) -> Self {
        Self {
            debouncer: Debouncer::starting_at(config.detector.clone(), started_at),
            rewards: config.rewards.clone(),
            found: Vec::new(),
            points: 0,
        }
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn feed(&mut self, observation: &Observation) -> Option<HuntEvent> {
        let discovered = self.debouncer.feed(observation)?;

        let points_awarded = if self.found.len() < self.rewards.discovery_goal {
            self.rewards.points_per_discovery
        } else {
            0
        };
        self.found.push(discovered.label.clone());
        self.points += points_awarded;

        tracing::info!(
            label = %discovered.label,
            points_awarded,
            found = self.found.len(),
            "object found"
        );

        Some(HuntEvent {
            label: discovered.label,
            points_awarded,
        })
    }

    /// Feed every observation the classifier produces
    pub fn run<C: Classifier>(&mut self, classifier: &mut C) -> Vec<HuntEvent> {
        std::iter::from_fn(|| classifier.next_observation())
            .filter_map(|obs| self.feed(&obs))
            .collect()
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn summary(&self) -> HuntSummary {
        HuntSummary {
            discovered: self.found.clone(),
            points: self.points,
            goal: self.rewards.discovery_goal,
            goal_met: self.found.len() >= self.rewards.discovery_goal,
        }
    }
}

/// Apply a finished activity: running average, points, streak, history.
///
/// The saved snapshot is authoritative. Once it is written the call succeeds
/// even if the history line cannot be appended.
pub fn record_completion<S: ProgressStore + ?Sized>(
    store: &S,
    rewards: &RewardConfig,
    category: &str,
    score: f64,
    duration_secs: f64,
    at: DateTime<Utc>,
) -> Result<Progress, StoreError> {
    let mut progress = store.load()?;

    progress.category_mut(category).record(score, duration_secs);
    progress.profile.add_points(rewards.points_per_completion);
    progress.profile.touch(at.date_naive());
    store.save(&progress)?;

    let record = CompletionRecord {
        category: category.to_string(),
        score,
        duration_secs,
        timestamp: at,
        points_awarded: rewards.points_per_completion,
    };
    if let Err(err) = store.log_completion(&record) {
        tracing::warn!(category, %err, "completion saved but not written to history");
    }

    tracing::debug!(category, score, duration_secs, "completion recorded");
    Ok(progress)
}

/// Add hunt points to the profile and mark the day active
pub fn credit_points<S: ProgressStore + ?Sized>(
    store: &S,
    points: u64,
    today: NaiveDate,
) -> Result<Progress, StoreError> {
    let mut progress = store.load()?;
    if points > 0 {
        progress.profile.add_points(points);
        progress.profile.touch(today);
        store.save(&progress)?;
    }
    Ok(progress)
}

/// Recommendation over a fresh snapshot of the stored categories
pub fn recommend_from<S: ProgressStore + ?Sized>(
    store: &S,
    config: &ScorerConfig,
) -> Result<Option<Recommendation>, StoreError> {
    let progress = store.load()?;
    Ok(recommend(&progress.categories, config))
}
