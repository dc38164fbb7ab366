use anyhow::Context;
use signal_pipe::{draw_params, CsvSink, SignalStream, SleepPacer, StreamConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries nothing but the CSV stream.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = StreamConfig::default();
    let params = draw_params(&mut rand::thread_rng(), cfg.num_signals);
    for (i, p) in params.iter().enumerate() {
        info!(
            signal = i + 1,
            location = p.location,
            scale = p.scale,
            "drew signal identity"
        );
    }
    info!(
        num_signals = cfg.num_signals,
        rate = cfg.rate,
        "starting stream"
    );

    let mut sink = CsvSink::stdout();
    sink.write_header(cfg.num_signals).context("write header")?;

    // Runs until externally interrupted; a closed pipe surfaces as a write
    // error and takes the process down, which is the intended exit path.
    let stream = SignalStream::new(cfg, &params, rand::thread_rng(), SleepPacer)?;
    for row in stream {
        sink.write_row(&row).context("write row")?;
    }
    Ok(())
}
