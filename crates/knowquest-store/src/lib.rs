//! Persistence for learner progress: category performance, profile and completion history

mod error;
mod io;
mod paths;
mod store;
mod types;

pub use error::StoreError;
pub use io::{append_jsonl, atomic_write, read_jsonl, read_jsonl_from};
pub use paths::Paths;
pub use store::{JsonFileStore, MemoryStore, ProgressStore};
pub use types::{CategoryPerformance, CompletionRecord, Progress, UserProfile, DEFAULT_CATEGORIES};
