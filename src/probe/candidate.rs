use std::sync::Arc;

use crate::model::{ModuleMatch, ProbeOutcome};
use crate::probe::fetch::Fetcher;
use crate::probe::paths::PathTemplateSet;
use crate::probe::version::extract_version;

/// 200 means the file is served, 403 means it exists behind an access rule.
pub fn is_qualifying_status(status: u16) -> bool {
    status == 200 || status == 403
}

/// Probes one module against the target, trying templates in priority order.
#[derive(Debug, Clone)]
pub struct CandidateProbe {
    base_url: String,
    templates: Arc<PathTemplateSet>,
    debug: bool,
}

impl CandidateProbe {
    pub fn new(base_url: impl Into<String>, templates: Arc<PathTemplateSet>, debug: bool) -> Self {
        Self {
            base_url: base_url.into(),
            templates,
            debug,
        }
    }

    /// Returns the first qualifying response for `module`, or `NoMatch`.
    ///
    /// Transport errors only advance to the next template, so this never fails.
    pub async fn probe<F: Fetcher + ?Sized>(&self, module: &str, fetcher: &F) -> ProbeOutcome {
        for candidate in self.templates.candidates(&self.base_url, module) {
            let resp = match fetcher.get(&candidate.url).await {
                Ok(resp) => resp,
                Err(e) => {
                    if self.debug {
                        tracing::debug!("[!] Exception for {}: {}", candidate.url, e);
                    }
                    continue;
                }
            };

            if !is_qualifying_status(resp.status) {
                tracing::trace!("{} -> {}", candidate.url, resp.status);
                continue;
            }

            let version = if candidate.metadata && resp.status == 200 {
                extract_version(&resp.body)
            } else {
                None
            };

            return ProbeOutcome::Matched(ModuleMatch {
                module: module.to_string(),
                url: candidate.url,
                status: resp.status,
                version,
            });
        }
        ProbeOutcome::NoMatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::fetch::ResponseSummary;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scripted fetcher: URLs not in the map fail at the transport level.
    struct Scripted {
        responses: HashMap<String, ResponseSummary>,
        seen: Mutex<Vec<String>>,
    }

    impl Scripted {
        fn new(entries: &[(&str, u16, &str)]) -> Self {
            Self {
                responses: entries
                    .iter()
                    .map(|(u, s, b)| (u.to_string(), ResponseSummary::new(*s, *b)))
                    .collect(),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for Scripted {
        async fn get(&self, url: &str) -> anyhow::Result<ResponseSummary> {
            self.seen.lock().unwrap().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("connection refused"))
        }
    }

    fn probe(templates: &[&str]) -> CandidateProbe {
        let set = PathTemplateSet::from_templates(templates.iter().copied()).unwrap();
        CandidateProbe::new("http://t", Arc::new(set), true)
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let p = probe(&["/a/{mod}", "/b/{mod}", "/c/{mod}"]);
        let f = Scripted::new(&[("http://t/a/x", 404, ""), ("http://t/b/x", 403, ""), ("http://t/c/x", 200, "")]);
        let outcome = p.probe("x", &f).await;
        let m = outcome.into_match().unwrap();
        assert_eq!(m.url, "http://t/b/x");
        assert_eq!(m.status, 403);
        assert_eq!(f.seen(), vec!["http://t/a/x", "http://t/b/x"]);
    }

    #[tokio::test]
    async fn test_non_qualifying_statuses() {
        for status in [301u16, 302, 401, 404, 500, 503] {
            let p = probe(&["/a/{mod}"]);
            let f = Scripted::new(&[("http://t/a/x", status, "")]);
            assert_eq!(p.probe("x", &f).await, ProbeOutcome::NoMatch, "status {}", status);
        }
    }

    #[tokio::test]
    async fn test_transport_errors_advance() {
        let p = probe(&["/a/{mod}", "/b/{mod}"]);
        let f = Scripted::new(&[("http://t/b/x", 200, "")]);
        let m = p.probe("x", &f).await.into_match().unwrap();
        assert_eq!(m.url, "http://t/b/x");

        let all_down = Scripted::new(&[]);
        assert_eq!(p.probe("x", &all_down).await, ProbeOutcome::NoMatch);
        assert_eq!(all_down.seen().len(), 2);
    }

    #[tokio::test]
    async fn test_version_only_for_metadata_200() {
        let body = "name: Foo\nversion: 8.x-1.3\n";
        let p = probe(&["/m/{mod}/{mod}.info.yml", "/m/{mod}/README.txt"]);

        let f = Scripted::new(&[("http://t/m/x/x.info.yml", 200, body)]);
        let m = p.probe("x", &f).await.into_match().unwrap();
        assert_eq!(m.version.as_deref(), Some("8.x-1.3"));

        let f = Scripted::new(&[("http://t/m/x/x.info.yml", 403, body)]);
        assert_eq!(p.probe("x", &f).await.into_match().unwrap().version, None);

        let f = Scripted::new(&[("http://t/m/x/x.info.yml", 404, ""), ("http://t/m/x/README.txt", 200, body)]);
        let m = p.probe("x", &f).await.into_match().unwrap();
        assert_eq!(m.url, "http://t/m/x/README.txt");
        assert_eq!(m.version, None);
    }
}
