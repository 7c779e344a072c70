pub mod concurrent;
pub mod config;
pub mod http_client;
pub mod model;
pub mod output;
pub mod probe;
pub mod scanner;
pub mod utils;

pub use crate::config::ScanConfig;
pub use crate::model::{ModuleMatch, ProbeOutcome, ScanResult};
pub use crate::scanner::{scan, scan_with};
