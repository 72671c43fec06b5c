use knowquest_core::{recommend, score, Config};
use knowquest_store::{Progress, ProgressStore};
use serde_json::{json, Value};

pub fn run() -> anyhow::Result<()> {
    let (store, config) = super::open()?;
    let progress = store.load()?;
    println!("{}", render(&progress, &config));
    Ok(())
}

fn render(progress: &Progress, config: &Config) -> Value {
    let categories: Vec<Value> = progress
        .categories
        .iter()
        .map(|record| {
            let s = score(record, &config.scorer);
            json!({
                "id": record.id,
                "completed": record.completed_count,
                "average_score": record.average_score,
                "ranked": record.completed_count >= config.scorer.min_completions,
                "score": s.combined,
            })
        })
        .collect();

    json!({
        "points": progress.profile.points,
        "streak": progress.profile.streak,
        "goal": progress.profile.goal,
        "categories": categories,
        "recommended": recommend(&progress.categories, &config.scorer),
    })
}
