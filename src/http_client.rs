use anyhow::{Context, Result};
use reqwest::{Client, ClientBuilder, Proxy};
use std::time::Duration;

use crate::config::ScanConfig;
use crate::probe::REQUEST_TIMEOUT;

/// Build the one client shared by every probe in a run.
pub fn create_scan_client(config: &ScanConfig) -> Result<Client> {
    let mut builder = ClientBuilder::new()
        // Connection pooling, sized for one connection per worker
        .pool_max_idle_per_host(config.threads.max(1))
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_nodelay(true)

        // Timeouts
        .timeout(REQUEST_TIMEOUT)
        .connect_timeout(REQUEST_TIMEOUT)

        // Compression
        .gzip(true)
        .brotli(true)

        .use_rustls_tls()
        .https_only(false)

        // A redirect is not evidence of the module; report the raw status
        .redirect(reqwest::redirect::Policy::none())

        .danger_accept_invalid_certs(!config.verify_tls);

    // Without --proxy, ignore HTTP(S)_PROXY from the environment and connect directly
    builder = match config.proxy {
        Some(ref proxy) => {
            let proxy = Proxy::all(proxy).with_context(|| format!("invalid proxy '{}'", proxy))?;
            builder.proxy(proxy)
        }
        None => builder.no_proxy(),
    };

    builder.build().context("failed to build HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let cfg = ScanConfig::new("https://example.org", vec![]);
        assert!(create_scan_client(&cfg).is_ok());
    }

    #[test]
    fn test_insecure_proxied_client() {
        let cfg = ScanConfig::new("https://example.org", vec![])
            .with_proxy(Some("http://127.0.0.1:8080".into()))
            .with_verify_tls(false);
        assert!(create_scan_client(&cfg).is_ok());
    }

    #[test]
    fn test_invalid_proxy_rejected() {
        let cfg = ScanConfig::new("https://example.org", vec![]).with_proxy(Some("ftp://127.0.0.1:21".into()));
        assert!(create_scan_client(&cfg).is_err());
    }
}
