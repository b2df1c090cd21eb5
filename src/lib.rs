#[cfg(test)]
mod tests;

pub mod error;

pub mod sample;

pub mod config;

pub mod walk;

pub mod buffer;

pub mod feed;

pub mod measurements;

pub mod track;

pub use buffer::{append, bulk_initialize, RollingSeriesBuffer};
pub use config::FeedConfig;
pub use error::{FeedError, Result};
pub use feed::Feed;
pub use sample::{Sample, Timestamp};
pub use walk::{Constant, RandomWalk};

/// Something that produces the value of the next sample of a series
///
/// `previous` is the value of the current last sample, or None for an empty series.
/// Implementations must return a value within [sample::VALUE_MIN, sample::VALUE_MAX]
pub trait ValueSource {
    fn next_value(&mut self, previous: Option<f64>) -> f64;
}

impl<S: ValueSource + ?Sized> ValueSource for &mut S {
    fn next_value(&mut self, previous: Option<f64>) -> f64 {
        (**self).next_value(previous)
    }
}
