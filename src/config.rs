use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of simulated signals per row.
pub const DEFAULT_NUM_SIGNALS: usize = 5;
/// Default output rate in rows per second.
pub const DEFAULT_RATE: f64 = 50.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("num_signals must be at least 1")]
    NoSignals,
    #[error("rate must be positive and finite (got {0})")]
    BadRate(f64),
}

/// Stream-wide configuration, fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    pub num_signals: usize,
    /// Rows per second.
    pub rate: f64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            num_signals: DEFAULT_NUM_SIGNALS,
            rate: DEFAULT_RATE,
        }
    }
}

impl StreamConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_signals == 0 {
            return Err(ConfigError::NoSignals);
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(ConfigError::BadRate(self.rate));
        }
        Ok(())
    }

    /// Pause between consecutive rows.
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.rate)
    }
}

/// Per-signal Gaussian identity, drawn once per run and immutable thereafter.
///
/// Holding `(location, scale)` fixed is what makes a run look like one
/// coherent set of sensors instead of unrelated noise sample-to-sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalParams {
    /// Mean of the signal's distribution.
    pub location: f64,
    /// Standard deviation of the signal's distribution.
    pub scale: f64,
}

impl SignalParams {
    /// Draws one identity: location uniform in [-20, 20), scale uniform in [0, 5/3).
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            location: rng.gen_range(-20.0..20.0),
            scale: rng.gen_range(0.0..5.0 / 3.0),
        }
    }
}

/// Draws `num_signals` independent identities. Called exactly once per stream;
/// a seeded RNG reproduces the same set.
pub fn draw_params<R: Rng + ?Sized>(rng: &mut R, num_signals: usize) -> Vec<SignalParams> {
    (0..num_signals).map(|_| SignalParams::draw(rng)).collect()
}

/// Column labels: `Time`, then `signal1` .. `signalN`.
pub fn header(num_signals: usize) -> Vec<String> {
    let mut labels = Vec::with_capacity(num_signals + 1);
    labels.push("Time".to_string());
    for i in 1..=num_signals {
        labels.push(format!("signal{i}"));
    }
    labels
}
