use knowquest_store::{CompletionRecord, ProgressStore};
use std::collections::BTreeMap;

const RECENT_LIMIT: usize = 20;

#[derive(Debug, Default, PartialEq)]
struct CategoryTotals {
    completions: usize,
    score_sum: f64,
    seconds: f64,
    points: u64,
}

fn totals_by_category(records: &[CompletionRecord]) -> BTreeMap<&str, CategoryTotals> {
    let mut totals: BTreeMap<&str, CategoryTotals> = BTreeMap::new();
    for record in records {
        let entry = totals.entry(record.category.as_str()).or_default();
        entry.completions += 1;
        entry.score_sum += record.score;
        entry.seconds += record.duration_secs;
        entry.points += record.points_awarded;
    }
    totals
}

fn compute_stats(records: &[CompletionRecord]) -> String {
    if records.is_empty() {
        return "No completions to analyze.".to_string();
    }

    let mut lines = vec![format!("Total completions: {}", records.len())];
    for (category, t) in totals_by_category(records) {
        lines.push(format!(
            "{:<12} {:>3} done  avg {:>5.1}  {:>6.1} min  {:>5} pts",
            category,
            t.completions,
            t.score_sum / t.completions as f64,
            t.seconds / 60.0,
            t.points
        ));
    }
    lines.join("\n")
}

pub fn run(stats: bool) -> anyhow::Result<()> {
    let (store, _) = super::open()?;
    let records = store.completions()?;

    if records.is_empty() {
        println!("No completion history");
        return Ok(());
    }

    if stats {
        println!("{}", compute_stats(&records));
        return Ok(());
    }

    let recent: Vec<_> = records.iter().rev().take(RECENT_LIMIT).collect();
    println!("Recent completions (last {})", recent.len());
    for r in recent {
        println!(
            "  {}  {:<12} score {:>5.1}  {:>6.0}s  +{}",
            r.timestamp.format("%Y-%m-%d %H:%M"),
            r.category,
            r.score,
            r.duration_secs,
            r.points_awarded
        );
    }
    Ok(())
}
