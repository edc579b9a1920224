use super::*;
use crate::Fault;
use std::collections::VecDeque;

/// Replays a fixed sequence of classifier results, one per call.
/// Running out of script is a classifier failure.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    script: VecDeque<Result<Reading, Fault>>,
    calls: usize,
}

impl Scripted {
    pub fn new<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Reading>,
    {
        Self {
            script: readings.into_iter().map(Ok).collect(),
            calls: 0,
        }
    }
    pub fn then(mut self, reading: Reading) -> Self {
        self.script.push_back(Ok(reading));
        self
    }
    pub fn fail(mut self, fault: Fault) -> Self {
        self.script.push_back(Err(fault));
        self
    }
    /// How many times the classifier has been invoked.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Classifier for Scripted {
    fn classify(&mut self, _: &Tensor) -> Result<Reading, Fault> {
        self.calls += 1;
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(Fault::Classifier(String::from("script exhausted"))))
    }
}
