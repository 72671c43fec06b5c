//! Progress store backends

use crate::error::{Result, StoreError};
use crate::io::{append_jsonl, atomic_write, read_jsonl};
use crate::paths::Paths;
use crate::types::{CompletionRecord, Progress};
use std::sync::Mutex;

/// Key-value persistence for the learner's progress snapshot
pub trait ProgressStore {
    /// Current snapshot; a store with nothing saved yields `Progress::default()`
    fn load(&self) -> Result<Progress>;

    fn save(&self, progress: &Progress) -> Result<()>;

    /// Append to the completion history (no-op for stores without history)
    fn log_completion(&self, _record: &CompletionRecord) -> Result<()> {
        Ok(())
    }

    fn completions(&self) -> Result<Vec<CompletionRecord>> {
        Ok(Vec::new())
    }

    /// Forget everything
    fn reset(&self) -> Result<()>;
}

/// JSON snapshot plus JSONL history under a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    paths: Paths,
}

impl JsonFileStore {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> Result<Progress> {
        let path = self.paths.progress_file();
        if !path.exists() {
            return Ok(Progress::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Json { path, source })
    }

    fn save(&self, progress: &Progress) -> Result<()> {
        let path = self.paths.progress_file();
        let json = serde_json::to_string_pretty(progress).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        atomic_write(&path, json.as_bytes()).map_err(|e| StoreError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "saved progress");
        Ok(())
    }

    fn log_completion(&self, record: &CompletionRecord) -> Result<()> {
        let path = self.paths.completions_file();
        append_jsonl(&path, record).map_err(|e| StoreError::io(&path, e))
    }

    fn completions(&self) -> Result<Vec<CompletionRecord>> {
        let path = self.paths.completions_file();
        read_jsonl(&path).map_err(|e| StoreError::io(&path, e))
    }

    fn reset(&self) -> Result<()> {
        for path in [self.paths.progress_file(), self.paths.completions_file()] {
            match std::fs::remove_file(&path) {
                Ok(()) => tracing::info!(path = %path.display(), "removed"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(StoreError::io(&path, e)),
            }
        }
        Ok(())
    }
}

/// In-process store, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    progress: Mutex<Option<Progress>>,
    history: Mutex<Vec<CompletionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(progress: Progress) -> Self {
        Self {
            progress: Mutex::new(Some(progress)),
            history: Mutex::new(Vec::new()),
        }
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Progress> {
        let guard = self.progress.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, progress: &Progress) -> Result<()> {
        let mut guard = self.progress.lock().map_err(|_| StoreError::Poisoned)?;
        *guard = Some(progress.clone());
        Ok(())
    }

    fn log_completion(&self, record: &CompletionRecord) -> Result<()> {
        let mut guard = self.history.lock().map_err(|_| StoreError::Poisoned)?;
        guard.push(record.clone());
        Ok(())
    }

    fn completions(&self) -> Result<Vec<CompletionRecord>> {
        let guard = self.history.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn reset(&self) -> Result<()> {
        *self.progress.lock().map_err(|_| StoreError::Poisoned)? = None;
        self.history.lock().map_err(|_| StoreError::Poisoned)?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn completion(category: &str) -> CompletionRecord {
        CompletionRecord {
            category: category.to_string(),
            score: 75.0,
            duration_secs: 120.0,
            timestamp: Utc::now(),
            points_awarded: 20,
        }
    }

    #[test]
    fn test_file_store_defaults_when_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(Paths::with_root(dir.path()));

        let progress = store.load().unwrap();
        assert_eq!(progress, Progress::default());
        assert!(store.completions().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_persists_snapshot_and_history() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(Paths::with_root(dir.path().join("data")));

        let mut progress = store.load().unwrap();
        progress.category_mut("visual").record(90.0, 240.0);
        progress.profile.add_points(20);
        store.save(&progress).unwrap();
        store.log_completion(&completion("visual")).unwrap();

        let reopened = JsonFileStore::new(Paths::with_root(dir.path().join("data")));
        let loaded = reopened.load().unwrap();
        assert_eq!(loaded, progress);
        assert_eq!(reopened.completions().unwrap().len(), 1);
    }

    #[test]
    fn test_file_store_reports_corrupt_snapshot() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(dir.path());
        std::fs::write(paths.progress_file(), "not json").unwrap();

        let err = JsonFileStore::new(paths).load().unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }

    #[test]
    fn test_file_store_reset() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileStore::new(Paths::with_root(dir.path()));
        store.save(&Progress::default()).unwrap();
        store.log_completion(&completion("reading")).unwrap();

        store.reset().unwrap();
        store.reset().unwrap();

        assert!(!store.paths().progress_file().exists());
        assert!(store.completions().unwrap().is_empty());
    }

    #[test]
    fn test_memory_store_roundtrip_and_reset() {
        let store = MemoryStore::new();
        let mut progress = store.load().unwrap();
        progress.profile.add_points(10);
        store.save(&progress).unwrap();
        store.log_completion(&completion("auditory")).unwrap();

        assert_eq!(store.load().unwrap().profile.points, 10);
        assert_eq!(store.completions().unwrap().len(), 1);

        store.reset().unwrap();
        assert_eq!(store.load().unwrap().profile.points, 0);
        assert!(store.completions().unwrap().is_empty());
    }
}
