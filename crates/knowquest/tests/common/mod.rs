#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use knowquest_core::Observation;
use knowquest_store::CategoryPerformance;

pub fn session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 10, 14, 30, 0).unwrap()
}

pub fn at(secs: f64) -> DateTime<Utc> {
    session_start() + Duration::milliseconds((secs * 1000.0) as i64)
}

pub fn sighting(label: &str, confidence: f64, secs: f64) -> Observation {
    Observation::new(label, confidence, at(secs))
}

pub fn perf(id: &str, completed: u32, average_score: f64, total_secs: f64) -> CategoryPerformance {
    CategoryPerformance {
        id: id.to_string(),
        completed_count: completed,
        average_score,
        total_time_secs: total_secs,
    }
}
