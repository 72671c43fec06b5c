pub mod complete;
pub mod history;
pub mod hunt;
pub mod init;
pub mod recommend;
pub mod reset;
pub mod status;
pub mod version;

use knowquest_core::Config;
use knowquest_store::{JsonFileStore, Paths};

/// Store and config for the resolved data directory
pub(crate) fn open() -> anyhow::Result<(JsonFileStore, Config)> {
    let paths = Paths::new()?;
    let config = Config::load_or_default(&paths.config_file());
    Ok((JsonFileStore::new(paths), config))
}
