use knowquest_store::ProgressStore;

pub fn run(yes: bool) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete progress without --yes");
    }

    let (store, _) = super::open()?;
    store.reset()?;
    println!("✓ Progress reset");
    Ok(())
}
