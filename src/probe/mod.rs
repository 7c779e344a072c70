pub mod candidate;
pub mod fetch;
pub mod paths;
pub mod version;

pub use candidate::{is_qualifying_status, CandidateProbe};
pub use fetch::{Fetcher, HttpFetcher, ResponseSummary, REQUEST_TIMEOUT};
pub use paths::{CandidateUrl, PathTemplate, PathTemplateSet};
pub use version::extract_version;
