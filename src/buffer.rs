use crate::config::{check_capacity, FeedConfig, DEFAULT_CAPACITY};
use crate::error::FeedError;
use crate::sample::{Sample, Timestamp, VALUE_MIN};
use crate::walk::Constant;
use crate::ValueSource;
use serde::{Deserialize, Serialize};
use std::collections::vec_deque::{self, VecDeque};

/// An ordered, bounded series of samples. Insertion order is chronological order.
///
/// The eviction check runs before each push and evicts at most one sample, only
/// when the series already holds more than `capacity` samples. Under repeated
/// appends the length therefore settles at `capacity + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Snapshot")]
pub struct RollingSeriesBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

/// Unchecked serialized form, validated on the way in
#[derive(Deserialize)]
struct Snapshot {
    samples: Vec<Sample>,
    capacity: usize,
}

impl TryFrom<Snapshot> for RollingSeriesBuffer {
    type Error = FeedError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        check_capacity(snapshot.capacity)?;
        Ok(RollingSeriesBuffer::from_samples(
            snapshot.capacity,
            snapshot.samples,
        ))
    }
}

impl RollingSeriesBuffer {
    pub fn new() -> Self {
        RollingSeriesBuffer::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Invalid capacity: must be positive");
        // Large capacities grow on demand
        RollingSeriesBuffer {
            samples: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY) + 1),
            capacity,
        }
    }

    /// Build a buffer holding the given samples, without evicting any
    /// Values are clamped to [VALUE_MIN, VALUE_MAX]
    pub fn from_samples<I>(capacity: usize, samples: I) -> Self
    where
        I: IntoIterator<Item = Sample>,
    {
        let mut buffer = RollingSeriesBuffer::with_capacity(capacity);
        buffer.samples.extend(
            samples
                .into_iter()
                .map(|sample| Sample::clamped(sample.timestamp, sample.value)),
        );
        buffer
    }

    /// `count` zero-valued samples, 100ms apart, the last one stamped `now`
    pub fn bulk_initialize(count: usize, now: Timestamp) -> Self {
        RollingSeriesBuffer::bulk_initialize_with(&FeedConfig::default(), count, now)
    }

    /// Same as `bulk_initialize`, with capacity and spacing taken from `config`
    pub fn bulk_initialize_with(config: &FeedConfig, count: usize, now: Timestamp) -> Self {
        RollingSeriesBuffer::bulk_initialize_from(config, count, now, &mut Constant(VALUE_MIN))
    }

    /// Seed `count` evenly spaced samples ending at `now`, with values drawn from `source`
    pub fn bulk_initialize_from<S: ValueSource>(
        config: &FeedConfig,
        count: usize,
        now: Timestamp,
        source: &mut S,
    ) -> Self {
        let interval = config.seed_interval_ms;
        let mut buffer = RollingSeriesBuffer::with_capacity(config.capacity);
        let mut previous = None;
        for i in 0..count {
            let steps_back = (count - 1 - i) as i64;
            let timestamp = now.offset(steps_back.saturating_mul(interval).saturating_neg());
            let sample = Sample::clamped(timestamp, source.next_value(previous));
            buffer.samples.push_back(sample);
            previous = Some(sample.value);
        }
        tracing::debug!(count, capacity = config.capacity, "seeded rolling buffer");
        buffer
    }

    /// Take the buffer, append one sample stamped `timestamp` and hand it back
    pub fn append<S: ValueSource>(mut self, timestamp: Timestamp, source: &mut S) -> Self {
        self.push(timestamp, source);
        self
    }

    /// Append one sample in place, returning the evicted sample, if any
    pub fn push<S: ValueSource>(
        &mut self,
        timestamp: Timestamp,
        source: &mut S,
    ) -> Option<Sample> {
        self.advance(timestamp, source).1
    }

    /// Append one sample in place, returning it along with the evicted one
    pub(crate) fn advance<S: ValueSource>(
        &mut self,
        timestamp: Timestamp,
        source: &mut S,
    ) -> (Sample, Option<Sample>) {
        let evicted = if self.samples.len() > self.capacity {
            self.samples.pop_front()
        } else {
            None
        };

        let previous = self.samples.back().map(|sample| {
            if timestamp < sample.timestamp {
                tracing::warn!(
                    "out of order sample: {} arrived after {}",
                    timestamp,
                    sample.timestamp
                );
            }
            sample.value
        });

        let sample = Sample::clamped(timestamp, source.next_value(previous));
        self.samples.push_back(sample);
        (sample, evicted)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Plain values, oldest first
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.value).collect()
    }

    /// `[timestamp, value]` pairs, oldest first
    pub fn to_pairs(&self) -> Vec<(i64, f64)> {
        self.samples.iter().map(Sample::to_pair).collect()
    }
}

impl Default for RollingSeriesBuffer {
    fn default() -> Self {
        RollingSeriesBuffer::new()
    }
}

impl<'a> IntoIterator for &'a RollingSeriesBuffer {
    type Item = &'a Sample;
    type IntoIter = vec_deque::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// See `RollingSeriesBuffer::bulk_initialize`
pub fn bulk_initialize(count: usize, now: Timestamp) -> RollingSeriesBuffer {
    RollingSeriesBuffer::bulk_initialize(count, now)
}

/// See `RollingSeriesBuffer::append`
pub fn append<S: ValueSource>(
    buffer: RollingSeriesBuffer,
    timestamp: Timestamp,
    source: &mut S,
) -> RollingSeriesBuffer {
    buffer.append(timestamp, source)
}
