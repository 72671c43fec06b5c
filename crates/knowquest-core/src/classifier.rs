//! Classifier seam and stream adapters

use crate::types::Observation;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, VecDeque};

/// Source of observations; `None` ends the stream
pub trait Classifier {
    fn next_observation(&mut self) -> Option<Observation>;
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn next_observation(&mut self) -> Option<Observation> {
        (**self).next_observation()
    }
}

/// Replays a fixed sequence
#[derive(Debug, Clone, Default)]
pub struct ScriptedClassifier {
    queue: VecDeque<Observation>,
}

impl ScriptedClassifier {
    pub fn new(observations: impl IntoIterator<Item = Observation>) -> Self {
        Self {
            queue: observations.into_iter().collect(),
        }
    }
}

impl Classifier for ScriptedClassifier {
    fn next_observation(&mut self) -> Option<Observation> {
        self.queue.pop_front()
    }
}

/// Passes through every `every`-th observation of the inner stream
#[derive(Debug)]
pub struct FrameSampler<C> {
    inner: C,
    every: usize,
}

impl<C: Classifier> FrameSampler<C> {
    pub fn new(inner: C, every: usize) -> Self {
        Self {
            inner,
            every: every.max(1),
        }
    }
}

impl<C: Classifier> Classifier for FrameSampler<C> {
    fn next_observation(&mut self) -> Option<Observation> {
        for _ in 1..self.every {
            self.inner.next_observation()?;
        }
        self.inner.next_observation()
    }
}

/// Majority vote over the last `window` observations
#[derive(Debug)]
pub struct MajorityVote<C> {
    inner: C,
    window: usize,
    recent: VecDeque<Observation>,
}

impl<C: Classifier> MajorityVote<C> {
    pub fn new(inner: C, window: usize) -> Self {
        let window = window.max(1);
        Self {
            inner,
            window,
            recent: VecDeque::with_capacity(window),
        }
    }

    fn vote(&self, timestamp: DateTime<Utc>) -> Option<Observation> {
        // label -> (votes, confidence sum, latest position)
        let mut tally: HashMap<&str, (usize, f64, usize)> = HashMap::new();
        for (pos, obs) in self.recent.iter().enumerate() {
            let entry = tally.entry(obs.label.as_str()).or_insert((0, 0.0, pos));
            entry.0 += 1;
            entry.1 += obs.confidence;
            entry.2 = pos;
        }

        let (label, (votes, sum, _)) = tally
            .into_iter()
            .max_by(|a, b| (a.1 .0, a.1 .2).cmp(&(b.1 .0, b.1 .2)))?;

        Some(Observation::new(label, sum / votes as f64, timestamp))
    }
}

impl<C: Classifier> Classifier for MajorityVote<C> {
    fn next_observation(&mut self) -> Option<Observation> {
        let obs = self.inner.next_observation()?;
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        let timestamp = obs.timestamp;
        self.recent.push_back(obs);
        self.vote(timestamp)
    }
}
