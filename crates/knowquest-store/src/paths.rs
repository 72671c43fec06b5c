//! Path resolution for the KnowQuest data directory

use crate::error::{Result, StoreError};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "KNOWQUEST_HOME";

/// Resolves standard paths under the data directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// `$KNOWQUEST_HOME` when set and non-empty, otherwise `~/.knowquest`
    pub fn new() -> Result<Self> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(root));
        }

        let home = dirs::home_dir().ok_or(StoreError::HomeNotFound)?;
        Ok(Self::with_root(home.join(".knowquest")))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persisted profile and category snapshot
    pub fn progress_file(&self) -> PathBuf {
        self.root.join("progress.json")
    }

    /// Append-only completion history
    pub fn completions_file(&self) -> PathBuf {
        self.root.join("completions.jsonl")
    }

    /// User overrides for thresholds and weights
    pub fn config_file(&self) -> PathBuf {
        self.root.join("knowquest.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_with_root_layout() {
        let paths = Paths::with_root("/tmp/kq");
        assert_eq!(paths.progress_file(), PathBuf::from("/tmp/kq/progress.json"));
        assert_eq!(
            paths.completions_file(),
            PathBuf::from("/tmp/kq/completions.jsonl")
        );
        assert!(paths.config_file().ends_with("knowquest.json"));
    }

    #[test]
    #[serial]
    fn test_env_override() {
        std::env::set_var(HOME_ENV, "/tmp/kq-env");
        let paths = Paths::new().unwrap();
        std::env::remove_var(HOME_ENV);
        assert_eq!(paths.root(), Path::new("/tmp/kq-env"));
    }

    #[test]
    #[serial]
    fn test_default_under_home() {
        std::env::remove_var(HOME_ENV);
        let paths = Paths::new().unwrap();
        assert!(paths.root().ends_with(".knowquest"));
    }
}
