use knowquest_core::Config;
use knowquest_store::{atomic_write, JsonFileStore, Paths, ProgressStore};

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let created = init_at(&paths)?;

    println!("✓ KnowQuest data in {}", paths.root().display());
    for file in created {
        println!("  - created {}", file);
    }
    Ok(())
}

/// Write default config and progress where missing; returns what was created
fn init_at(paths: &Paths) -> anyhow::Result<Vec<String>> {
    std::fs::create_dir_all(paths.root())?;
    let mut created = Vec::new();

    let config_path = paths.config_file();
    if !config_path.exists() {
        let json = serde_json::to_string_pretty(&Config::default())?;
        atomic_write(&config_path, json.as_bytes())?;
        created.push("knowquest.json".to_string());
    }

    let store = JsonFileStore::new(paths.clone());
    if !paths.progress_file().exists() {
        store.save(&store.load()?)?;
        created.push("progress.json".to_string());
    }

    Ok(created)
}
