use knowquest_core::{
    credit_points, Classifier, FrameSampler, HuntSession, MajorityVote, Observation,
    ScriptedClassifier,
};
use knowquest_store::{read_jsonl, read_jsonl_from};
use std::path::Path;

pub fn run(file: Option<&str>, sample_every: usize, smooth: Option<usize>) -> anyhow::Result<()> {
    let (store, config) = super::open()?;

    let observations: Vec<Observation> = match file {
        Some(path) => read_jsonl(Path::new(path))?,
        None => read_jsonl_from(std::io::stdin().lock())?,
    };
    tracing::info!(count = observations.len(), "replaying observations");

    let started_at = observations
        .first()
        .map(|o| o.timestamp)
        .unwrap_or_else(chrono::Utc::now);
    let mut session = HuntSession::new(&config, started_at);
    let mut classifier = build_classifier(observations, sample_every, smooth);
    let events = session.run(&mut classifier);

    let summary = session.summary();
    let progress = credit_points(&store, summary.points, chrono::Utc::now().date_naive())?;

    let output = serde_json::json!({
        "events": events,
        "summary": summary,
        "total_points": progress.profile.points,
    });
    println!("{output}");
    Ok(())
}

fn build_classifier(
    observations: Vec<Observation>,
    sample_every: usize,
    smooth: Option<usize>,
) -> Box<dyn Classifier> {
    let sampled = FrameSampler::new(ScriptedClassifier::new(observations), sample_every);
    match smooth {
        Some(window) if window > 1 => Box::new(MajorityVote::new(sampled, window)),
        _ => Box::new(sampled),
    }
}
