use knowquest_core::{record_completion, Config};
use knowquest_store::ProgressStore;
use serde_json::{json, Value};

pub fn run(category: &str, score: f64, seconds: f64) -> anyhow::Result<()> {
    let (store, config) = super::open()?;
    let output = complete(&store, &config, category, score, seconds)?;
    println!("{output}");
    Ok(())
}

fn complete<S: ProgressStore>(
    store: &S,
    config: &Config,
    category: &str,
    score: f64,
    seconds: f64,
) -> anyhow::Result<Value> {
    let category = category.trim().to_lowercase();
    if category.is_empty() {
        anyhow::bail!("category must not be empty");
    }

    let progress = record_completion(
        store,
        &config.rewards,
        &category,
        score,
        seconds,
        chrono::Utc::now(),
    )?;
    let record = progress
        .category(&category)
        .ok_or_else(|| anyhow::anyhow!("category {} missing after update", category))?;

    Ok(json!({
        "category": record,
        "points": progress.profile.points,
        "streak": progress.profile.streak,
    }))
}
