pub mod console;

pub use console::{format_match, ConsoleReporter};

use crate::model::{ModuleMatch, ScanResult};

/// Receives scan events from the coordinator as they happen.
///
/// All calls come from the single collector loop, in completion order.
pub trait ReportSink: Send + Sync {
    fn on_start(&self, _total: usize) {}

    /// Called once per match, immediately when the probe finishes.
    fn on_match(&self, found: &ModuleMatch);

    fn on_progress(&self, _done: usize, _total: usize) {}

    fn on_complete(&self, result: &ScanResult);
}

/// Sink that discards everything.
pub struct NullSink;

impl ReportSink for NullSink {
    fn on_match(&self, _found: &ModuleMatch) {}

    fn on_complete(&self, _result: &ScanResult) {}
}
