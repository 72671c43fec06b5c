//! Detection debouncing, style recommendation and session bookkeeping

mod classifier;
mod config;
mod debouncer;
mod scorer;
mod session;
mod types;

pub use classifier::{Classifier, FrameSampler, MajorityVote, ScriptedClassifier};
pub use config::{Config, DetectorConfig, RewardConfig, ScorerConfig, ScoreWeights};
pub use debouncer::Debouncer;
pub use scorer::{rank, recommend, score, CategoryScore};
pub use session::{
    credit_points, record_completion, recommend_from, HuntEvent, HuntSession, HuntSummary,
};
pub use types::{DetectionState, Discovered, Observation, Recommendation};
