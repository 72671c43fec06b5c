use knowquest_core::recommend_from;

pub fn run() -> anyhow::Result<()> {
    let (store, config) = super::open()?;
    let recommendation = recommend_from(&store, &config.scorer)?;
    println!("{}", serde_json::to_string(&recommendation)?);
    Ok(())
}
