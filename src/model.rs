use std::time::Duration;

/// A module confirmed present on the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatch {
    pub module: String,
    pub url: String,
    pub status: u16,
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    NoMatch,
    Matched(ModuleMatch),
}

impl ProbeOutcome {
    pub fn into_match(self) -> Option<ModuleMatch> {
        match self {
            ProbeOutcome::Matched(m) => Some(m),
            ProbeOutcome::NoMatch => None,
        }
    }
}

/// Everything found during one run. `matches` is in completion order.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub target: String,
    pub matches: Vec<ModuleMatch>,
    pub scanned: usize,
    pub errors: usize,
    pub elapsed: Duration,
}

impl ScanResult {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, module: &str) -> Option<&ModuleMatch> {
        self.matches.iter().find(|m| m.module == module)
    }

    pub fn found(&self) -> usize {
        self.matches.len()
    }
}
