use crate::config::{ConfigError, SignalParams, StreamConfig};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::time::{Duration, Instant};

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("expected {want} signal parameter sets, got {got}")]
    ParamCountMismatch { want: usize, got: usize },
    #[error("signal {index} has an invalid gaussian: {source}")]
    BadDistribution {
        index: usize,
        source: rand_distr::NormalError,
    },
}

/// One tick's worth of output: elapsed seconds since stream start, then one
/// reading per signal.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRow {
    pub elapsed_secs: f64,
    pub readings: Vec<f64>,
}

impl SampleRow {
    /// Total field count, including the time column.
    pub fn width(&self) -> usize {
        self.readings.len() + 1
    }

    /// Comma-joined row using default float formatting.
    pub fn to_csv(&self) -> String {
        let mut line = self.elapsed_secs.to_string();
        for r in &self.readings {
            line.push(',');
            line.push_str(&r.to_string());
        }
        line
    }
}

/// The suspension seam between consecutive rows.
///
/// The stream pauses one period before every row after the first; that pause
/// is part of the contract, so it is injected rather than hardwired. Tests
/// and drain-everything-now callers pass [`NoopPacer`].
pub trait Pacer {
    fn pause(&mut self, period: Duration);
}

/// Real pacing: blocks the calling thread for the full period.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, period: Duration) {
        std::thread::sleep(period);
    }
}

/// No pacing; rows are produced as fast as they are requested.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&mut self, _period: Duration) {}
}

/// Lazy, infinite source of [`SampleRow`]s.
///
/// Parameters are threaded in explicitly at construction and never change; the
/// start instant is recorded when the stream is built, so the first row's
/// elapsed time is effectively zero. The iterator never returns `None`; it is
/// stopped only by its consumer going away.
pub struct SignalStream<R: Rng, P: Pacer> {
    period: Duration,
    distributions: Vec<Normal<f64>>,
    rng: R,
    pacer: P,
    start: Instant,
    started: bool,
}

impl<R: Rng, P: Pacer> SignalStream<R, P> {
    pub fn new(
        config: StreamConfig,
        params: &[SignalParams],
        rng: R,
        pacer: P,
    ) -> Result<Self, StreamError> {
        config.validate()?;
        if params.len() != config.num_signals {
            return Err(StreamError::ParamCountMismatch {
                want: config.num_signals,
                got: params.len(),
            });
        }
        let distributions = params
            .iter()
            .enumerate()
            .map(|(index, p)| {
                Normal::new(p.location, p.scale)
                    .map_err(|source| StreamError::BadDistribution { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            period: config.period(),
            distributions,
            rng,
            pacer,
            start: Instant::now(),
            started: false,
        })
    }
}

impl<R: Rng, P: Pacer> Iterator for SignalStream<R, P> {
    type Item = SampleRow;

    fn next(&mut self) -> Option<SampleRow> {
        if self.started {
            self.pacer.pause(self.period);
        } else {
            self.started = true;
        }

        let elapsed_secs = self.start.elapsed().as_secs_f64();
        let readings = self
            .distributions
            .iter()
            .map(|d| d.sample(&mut self.rng))
            .collect();
        Some(SampleRow {
            elapsed_secs,
            readings,
        })
    }
}
