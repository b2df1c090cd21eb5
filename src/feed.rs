use crate::buffer::RollingSeriesBuffer;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::sample::{Sample, Timestamp};
use crate::walk::RandomWalk;
use crate::ValueSource;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// A live chart feed: a rolling buffer advanced by a value source on each tick
pub struct Feed<S: ValueSource> {
    buffer: RollingSeriesBuffer,
    source: S,
}

impl Feed<RandomWalk<Pcg64>> {
    /// Validate `config`, seed `config.seed_count` zero samples ending at `now`
    /// and drive them with a random walk seeded from `config.seed` (or from entropy)
    pub fn seeded(config: &FeedConfig, now: Timestamp) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_entropy(),
        };
        let walk = RandomWalk::with_rng(rng, config.baseline, config.step);
        let buffer = RollingSeriesBuffer::bulk_initialize_with(config, config.seed_count, now);
        Ok(Feed::new(buffer, walk))
    }
}

impl<S: ValueSource> Feed<S> {
    pub fn new(buffer: RollingSeriesBuffer, source: S) -> Self {
        Feed { buffer, source }
    }

    /// Append one sample stamped `timestamp` and return it
    pub fn tick(&mut self, timestamp: Timestamp) -> Sample {
        let (sample, evicted) = self.buffer.advance(timestamp, &mut self.source);
        tracing::trace!(
            len = self.buffer.len(),
            evicted = evicted.is_some(),
            value = sample.value,
            "feed tick at {}",
            timestamp
        );
        sample
    }

    pub fn buffer(&self) -> &RollingSeriesBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> RollingSeriesBuffer {
        self.buffer
    }
}
