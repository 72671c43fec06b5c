//! Persisted record types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Learning-style categories seeded into a fresh profile
pub const DEFAULT_CATEGORIES: &[&str] = &["visual", "auditory", "reading", "kinesthetic"];

const DEFAULT_GOAL: u32 = 5;

/// Running performance for one learning-style category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPerformance {
    pub id: String,
    #[serde(default)]
    pub completed_count: u32,
    /// Mean score over all completions, 0-100
    #[serde(default)]
    pub average_score: f64,
    /// Seconds spent across all completions
    #[serde(default)]
    pub total_time_secs: f64,
}

impl CategoryPerformance {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            completed_count: 0,
            average_score: 0.0,
            total_time_secs: 0.0,
        }
    }

    /// Fold one completion into the running average
    pub fn record(&mut self, score: f64, duration_secs: f64) {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 100.0)
        };
        let duration = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };

        let n = self.completed_count as f64;
        self.average_score = (self.average_score * n + score) / (n + 1.0);
        self.completed_count += 1;
        self.total_time_secs += duration;
    }

    /// Mean seconds per completion, zero when nothing is completed yet
    pub fn average_time_secs(&self) -> f64 {
        if self.completed_count == 0 {
            0.0
        } else {
            self.total_time_secs / self.completed_count as f64
        }
    }
}

/// Profile fields kept next to the category records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub points: u64,
    /// Consecutive active days
    #[serde(default)]
    pub streak: u32,
    /// Daily activity goal
    #[serde(default = "default_goal")]
    pub goal: u32,
    #[serde(default)]
    pub last_active: Option<NaiveDate>,
}

fn default_goal() -> u32 {
    DEFAULT_GOAL
}

impl UserProfile {
    pub fn new() -> Self {
        Self {
            points: 0,
            streak: 0,
            goal: DEFAULT_GOAL,
            last_active: None,
        }
    }

    /// Mark activity on `today` and roll the streak forward
    pub fn touch(&mut self, today: NaiveDate) {
        self.streak = match self.last_active {
            Some(last) if last == today => self.streak.max(1),
            Some(last) if last.succ_opt() == Some(today) => self.streak + 1,
            Some(last) if last > today => self.streak.max(1),
            _ => 1,
        };
        if self.last_active.map_or(true, |last| today > last) {
            self.last_active = Some(today);
        }
    }

    pub fn add_points(&mut self, points: u64) {
        self.points = self.points.saturating_add(points);
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole persisted snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub categories: Vec<CategoryPerformance>,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            profile: UserProfile::new(),
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|id| CategoryPerformance::new(*id))
                .collect(),
        }
    }

    pub fn category(&self, id: &str) -> Option<&CategoryPerformance> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Existing record for `id`, or a zeroed one appended at the end
    pub fn category_mut(&mut self, id: &str) -> &mut CategoryPerformance {
        let idx = match self.categories.iter().position(|c| c.id == id) {
            Some(idx) => idx,
            None => {
                self.categories.push(CategoryPerformance::new(id));
                self.categories.len() - 1
            }
        };
        &mut self.categories[idx]
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of completion history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub category: String,
    pub score: f64,
    pub duration_secs: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub points_awarded: u64,
}
