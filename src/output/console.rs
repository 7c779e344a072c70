use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

use crate::model::{ModuleMatch, ScanResult};
use crate::output::ReportSink;

const MODULE_WIDTH: usize = 30;

/// One report line for a discovered module.
pub fn format_match(found: &ModuleMatch) -> String {
    let version = found
        .version
        .as_ref()
        .map(|v| format!(" | version: {}", v))
        .unwrap_or_default();
    format!(
        "[+] {:<width$} ({}) → {}{}",
        found.module,
        found.status,
        found.url,
        version,
        width = MODULE_WIDTH
    )
}

/// Live progress bar plus one printed line per match.
pub struct ConsoleReporter {
    pb: ProgressBar,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { pb: ProgressBar::new(0) }
    }

    /// Log sink for `tracing_subscriber` that prints around the bar.
    pub fn log_writer(&self) -> BarWriter {
        BarWriter { pb: self.pb.clone() }
    }
}

/// Writes to stderr with the progress bar suspended, one event per write.
#[derive(Clone)]
pub struct BarWriter {
    pb: ProgressBar,
}

impl Write for BarWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pb.suspend(|| io::stderr().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for BarWriter {
    type Writer = BarWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for ConsoleReporter {
    fn on_start(&self, total: usize) {
        self.pb.set_length(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{msg}: {percent:>3}%|{bar:40.cyan/blue}| {pos}/{len} [{elapsed_precise}]")
        {
            self.pb.set_style(style.progress_chars("█▓▒░ "));
        }
        self.pb.set_message("Scanning modules");
        self.pb.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_match(&self, found: &ModuleMatch) {
        let line = format_match(found);
        self.pb.suspend(|| println!("{}", line));
    }

    fn on_progress(&self, done: usize, _total: usize) {
        self.pb.set_position(done as u64);
    }

    fn on_complete(&self, result: &ScanResult) {
        self.pb.finish_and_clear();
        println!(
            "[i] Done: {} module(s) found, {} scanned in {:.1}s",
            result.found(),
            result.scanned,
            result.elapsed.as_secs_f64()
        );
        if result.errors > 0 {
            println!("[!] {} worker task(s) failed", result.errors);
        }
    }
}
