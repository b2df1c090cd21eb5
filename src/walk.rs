use crate::sample::clamp_value;
use crate::ValueSource;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

pub const DEFAULT_BASELINE: f64 = 50.;
pub const DEFAULT_STEP: f64 = 5.;

/// A bounded random walk:
/// next = clamp(previous + U(-step, step)), where U is uniform in [-step, step)
/// An empty history starts from `baseline`
pub struct RandomWalk<R: Rng> {
    rng: R,
    baseline: f64,
    step: f64,
}

impl RandomWalk<Pcg64> {
    /// A reproducible walk: the same seed always yields the same sequence
    pub fn seeded(seed: u64) -> Self {
        RandomWalk::with_rng(Pcg64::seed_from_u64(seed), DEFAULT_BASELINE, DEFAULT_STEP)
    }

    pub fn from_entropy() -> Self {
        RandomWalk::with_rng(Pcg64::from_entropy(), DEFAULT_BASELINE, DEFAULT_STEP)
    }
}

impl<R: Rng> RandomWalk<R> {
    pub fn with_rng(rng: R, baseline: f64, step: f64) -> Self {
        assert!(
            step >= 0. && step.is_finite(),
            "Invalid step {}: must be finite and non-negative",
            step
        );
        RandomWalk {
            rng,
            baseline: clamp_value(baseline),
            step,
        }
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Uniform draw in [-step, step)
    fn next_perturbation(&mut self) -> f64 {
        let unit: f64 = self.rng.gen();
        unit * 2. * self.step - self.step
    }
}

impl<R: Rng> ValueSource for RandomWalk<R> {
    fn next_value(&mut self, previous: Option<f64>) -> f64 {
        let previous = previous.unwrap_or(self.baseline);
        clamp_value(previous + self.next_perturbation())
    }
}

/// Always yields the same (clamped) value
#[derive(Debug, Copy, Clone)]
pub struct Constant(pub f64);

impl ValueSource for Constant {
    fn next_value(&mut self, _previous: Option<f64>) -> f64 {
        clamp_value(self.0)
    }
}
