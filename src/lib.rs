//! Synthetic sensor-signal stream generator.
//!
//! This crate produces an unbounded sequence of timestamped telemetry rows:
//! each row is an elapsed-time stamp plus one reading per simulated signal,
//! drawn from a per-signal Gaussian whose `(location, scale)` identity is
//! fixed for the life of the stream. Rows serialize as comma-separated text,
//! one per line, at a fixed output rate. The intent is plausible streaming
//! data for dashboards and plotting pipelines, not physical fidelity.

pub mod config;
pub mod sink;
pub mod stream;

pub use crate::config::{draw_params, header, SignalParams, StreamConfig};
pub use crate::sink::CsvSink;
pub use crate::stream::{NoopPacer, Pacer, SampleRow, SignalStream, SleepPacer};
