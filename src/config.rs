use std::sync::Arc;

use anyhow::{bail, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::probe::PathTemplateSet;

pub const DEFAULT_THREADS: usize = 20;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/136.0.0.0 Safari/537.36";

/// Settings for a single scan. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub base_url: String,
    pub modules: Vec<String>,
    pub user_agent: String,
    pub threads: usize,
    pub proxy: Option<String>,
    pub verify_tls: bool,
    pub debug: bool,
    pub templates: Arc<PathTemplateSet>,
}

impl ScanConfig {
    pub fn new(base_url: impl Into<String>, modules: Vec<String>) -> Self {
        Self {
            base_url: base_url.into(),
            modules,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            threads: DEFAULT_THREADS,
            proxy: None,
            verify_tls: true,
            debug: false,
            templates: Arc::new(PathTemplateSet::default()),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_templates(mut self, templates: PathTemplateSet) -> Self {
        self.templates = Arc::new(templates);
        self
    }

    /// Reject settings that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .with_context(|| format!("invalid target URL '{}'", self.base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("target URL must use http or https, got '{}'", parsed.scheme());
        }
        if parsed.host_str().is_none() {
            bail!("target URL '{}' has no host", self.base_url);
        }
        if self.threads == 0 {
            bail!("thread count must be at least 1");
        }
        if let Some(ref proxy) = self.proxy {
            url::Url::parse(proxy).with_context(|| format!("invalid proxy URL '{}'", proxy))?;
        }
        Ok(())
    }

    /// Headers sent with every probe request.
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let ua = HeaderValue::from_str(&self.user_agent).context("invalid User-Agent header value")?;
        headers.insert(USER_AGENT, ua);
        Ok(headers)
    }
}
