//! Weighted learning-style recommendation

use crate::config::ScorerConfig;
use crate::types::Recommendation;
use knowquest_store::CategoryPerformance;
use serde::Serialize;

/// Normalized sub-scores for one category, each in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category_id: String,
    pub completion: f64,
    pub performance: f64,
    pub efficiency: f64,
    pub combined: f64,
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Score a single record, regardless of whether it has enough completions
pub fn score(record: &CategoryPerformance, config: &ScorerConfig) -> CategoryScore {
    let completion = unit(record.completed_count as f64 / config.completion_target);
    let performance = unit(record.average_score / 100.0);
    let efficiency = unit(1.0 - record.average_time_secs() / config.reference_secs);

    let w = &config.weights;
    let combined =
        w.completion * completion + w.performance * performance + w.efficiency * efficiency;

    CategoryScore {
        category_id: record.id.clone(),
        completion,
        performance,
        efficiency,
        combined,
    }
}

fn qualifies(record: &CategoryPerformance, config: &ScorerConfig) -> bool {
    record.completed_count >= config.min_completions
}

/// Qualifying categories, best first; equal scores keep input order
pub fn rank(records: &[CategoryPerformance], config: &ScorerConfig) -> Vec<CategoryScore> {
    let mut scored: Vec<CategoryScore> = records
        .iter()
        .filter(|r| qualifies(r, config))
        .map(|r| score(r, config))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| {
        b.combined
            .partial_cmp(&a.combined)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

/// Pick the best category.
///
/// Only a strictly greater combined score displaces the current best, so the
/// earliest record wins ties. With records but none qualifying, the first
/// record is returned at the fallback confidence. No records, no answer.
pub fn recommend(
    records: &[CategoryPerformance],
    config: &ScorerConfig,
) -> Option<Recommendation> {
    let first = records.first()?;

    let mut best: Option<CategoryScore> = None;
    for record in records.iter().filter(|r| qualifies(r, config)) {
        let candidate = score(record, config);
        match &best {
            Some(current) if candidate.combined <= current.combined => {}
            _ => best = Some(candidate),
        }
    }

    let recommendation = match best {
        Some(best) => Recommendation {
            category_id: best.category_id,
            confidence: unit(best.combined),
        },
        None => Recommendation {
            category_id: first.id.clone(),
            confidence: config.fallback_confidence,
        },
    };

    tracing::debug!(
        category = %recommendation.category_id,
        confidence = recommendation.confidence,
        "recommendation"
    );
    Some(recommendation)
}
