//! In-memory representation of a JTL sample log.

use serde::{Deserialize, Serialize};

/// One load-test result record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Test label (JMeter sampler name)
    pub label: String,

    /// Elapsed duration in milliseconds
    pub elapsed: f64,

    /// Whether the sampler reported success
    pub success: bool,

    /// Sample start in milliseconds since epoch
    pub timestamp: i64,
}

impl Sample {
    pub fn new(label: impl Into<String>, elapsed: f64, success: bool, timestamp: i64) -> Self {
        Self {
            label: label.into(),
            elapsed,
            success,
            timestamp,
        }
    }
}

/// Ordered, read-only sequence of samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }
}

impl From<Vec<Sample>> for SampleSet {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
