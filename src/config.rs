use crate::error::{FeedError, Result};
use crate::sample::{VALUE_MAX, VALUE_MIN};
use crate::walk::{DEFAULT_BASELINE, DEFAULT_STEP};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CAPACITY: usize = 200;
pub const MAX_CAPACITY: usize = 1_000_000;
pub const DEFAULT_SEED_INTERVAL_MS: i64 = 100;
pub const DEFAULT_SEED_COUNT: usize = 200;

/// Settings of a rolling feed, usually read from a `feed.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Eviction threshold: the buffer evicts once it holds more than this many samples
    pub capacity: usize,
    /// Spacing between the samples created by bulk initialization
    pub seed_interval_ms: i64,
    /// How many samples bulk initialization creates
    pub seed_count: usize,
    /// Starting value of the random walk on an empty buffer
    pub baseline: f64,
    /// Maximum absolute change between two consecutive walk values
    pub step: f64,
    /// Fixed RNG seed; a fresh entropy seed is used when absent
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed_interval_ms: DEFAULT_SEED_INTERVAL_MS,
            seed_count: DEFAULT_SEED_COUNT,
            baseline: DEFAULT_BASELINE,
            step: DEFAULT_STEP,
            seed: None,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> Result<()> {
        check_capacity(self.capacity)?;
        if !self.step.is_finite() || self.step < 0. {
            return Err(FeedError::Config(format!(
                "step must be finite and non-negative, got {}",
                self.step
            )));
        }
        if !(self.baseline >= VALUE_MIN && self.baseline <= VALUE_MAX) {
            return Err(FeedError::Config(format!(
                "baseline {} is outside [{}, {}]",
                self.baseline, VALUE_MIN, VALUE_MAX
            )));
        }
        if self.seed_interval_ms <= 0 {
            return Err(FeedError::Config(format!(
                "seed_interval_ms must be positive, got {}",
                self.seed_interval_ms
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 || capacity > MAX_CAPACITY {
        return Err(FeedError::Config(format!(
            "capacity must be within [1, {}], got {}",
            MAX_CAPACITY, capacity
        )));
    }
    Ok(())
}

/// Parse and validate a TOML document
pub fn from_str(raw: &str) -> Result<FeedConfig> {
    let config: FeedConfig = toml::from_str(raw)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file. Returns `FeedConfig::default()` if
/// the file doesn't exist
pub fn load(path: impl AsRef<Path>) -> Result<FeedConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(FeedConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;
    let config = from_str(&raw)?;
    tracing::debug!(?config, "loaded feed config from '{}'", path.display());
    Ok(config)
}
