use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const VALUE_MIN: f64 = 0.;
pub const VALUE_MAX: f64 = 100.;

/// Limit a value to [VALUE_MIN, VALUE_MAX]
/// NaN is mapped to VALUE_MIN, so a sample never carries it
pub fn clamp_value(value: f64) -> f64 {
    if value.is_nan() {
        VALUE_MIN
    } else {
        value.max(VALUE_MIN).min(VALUE_MAX)
    }
}

/// Milliseconds since the Unix epoch
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn from_millis(millis: i64) -> Timestamp {
        Timestamp(millis)
    }

    pub fn now() -> Timestamp {
        Timestamp(chrono::Utc::now().timestamp_millis())
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Shift by a signed number of milliseconds, saturating at the i64 bounds
    pub fn offset(self, millis: i64) -> Timestamp {
        Timestamp(self.0.saturating_add(millis))
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Timestamp {
        Timestamp(millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// One point of the series
/// For ordering, only the field `timestamp` is considered
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: Timestamp,
    pub value: f64,
}

impl Sample {
    pub fn clamped(timestamp: Timestamp, value: f64) -> Sample {
        Sample {
            timestamp,
            value: clamp_value(value),
        }
    }

    /// The `[timestamp, value]` pair consumed by chart widgets
    pub fn to_pair(&self) -> (i64, f64) {
        (self.timestamp.as_millis(), self.value)
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
    }
}

impl Eq for Sample {}

impl PartialOrd for Sample {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sample {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clamp() {
        assert_eq!(clamp_value(-0.5), 0.);
        assert_eq!(clamp_value(42.), 42.);
        assert_eq!(clamp_value(100.5), 100.);
        assert_eq!(clamp_value(std::f64::NAN), 0.);
        assert_eq!(clamp_value(std::f64::INFINITY), 100.);
    }

    #[test]
    fn clamped_sample() {
        let s = Sample::clamped(Timestamp::from_millis(7), 130.);
        assert_eq!(s.value, 100.);
        assert_eq!(s.to_pair(), (7, 100.));
    }

    #[test]
    fn ordered_by_timestamp() {
        let a = Sample::clamped(1.into(), 90.);
        let b = Sample::clamped(2.into(), 10.);
        assert!(a < b);
        assert_eq!(a, Sample::clamped(1.into(), 0.));
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(Timestamp::from_millis(1_000).offset(-100).as_millis(), 900);
        assert_eq!(Timestamp::from_millis(std::i64::MAX).offset(1).as_millis(), std::i64::MAX);
    }
}
