use crate::config::header;
use crate::stream::SampleRow;
use std::io::{self, BufWriter, IsTerminal, StdoutLock, Write};

/// CSV writer with an explicit per-line flush policy.
///
/// Whether every line is flushed is decided by the caller at construction,
/// not probed from the environment inside the writer. [`CsvSink::stdout`]
/// applies the pipe-friendly default: flush per line whenever stdout is not
/// an interactive terminal, so a downstream reader sees rows as they are
/// produced instead of after a buffer fills.
pub struct CsvSink<W: Write> {
    out: W,
    flush_every_line: bool,
}

impl CsvSink<BufWriter<StdoutLock<'static>>> {
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let flush_every_line = !stdout.is_terminal();
        Self::new(BufWriter::new(stdout.lock()), flush_every_line)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W, flush_every_line: bool) -> Self {
        Self {
            out,
            flush_every_line,
        }
    }

    pub fn flush_every_line(&self) -> bool {
        self.flush_every_line
    }

    /// Emits the label row. Call exactly once, before any sample row.
    pub fn write_header(&mut self, num_signals: usize) -> io::Result<()> {
        self.write_line(&header(num_signals).join(","))
    }

    pub fn write_row(&mut self, row: &SampleRow) -> io::Result<()> {
        self.write_line(&row.to_csv())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")?;
        if self.flush_every_line {
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
