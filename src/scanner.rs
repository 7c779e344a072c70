use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;

use crate::concurrent::ConcurrentProbe;
use crate::config::ScanConfig;
use crate::http_client::create_scan_client;
use crate::model::{ProbeOutcome, ScanResult};
use crate::output::ReportSink;
use crate::probe::{CandidateProbe, Fetcher, HttpFetcher};

/// Scan every module in `config` against the target over real HTTP.
pub async fn scan(config: &ScanConfig, sink: &dyn ReportSink) -> Result<ScanResult> {
    let client = create_scan_client(config)?;
    let fetcher = Arc::new(HttpFetcher::new(client, config.headers()?));
    scan_with(config, fetcher, sink).await
}

/// Same as [`scan`] with a caller-supplied network layer.
///
/// Configuration problems fail here, before any request is sent.
pub async fn scan_with<F>(config: &ScanConfig, fetcher: Arc<F>, sink: &dyn ReportSink) -> Result<ScanResult>
where
    F: Fetcher + 'static,
{
    config.validate()?;

    let total = config.modules.len();
    let started = Instant::now();
    let mut result = ScanResult::new(&config.base_url);

    tracing::info!(
        url = %config.base_url,
        modules = total,
        threads = config.threads,
        templates = config.templates.len(),
        "Starting module scan"
    );
    sink.on_start(total);

    let probe = Arc::new(CandidateProbe::new(
        config.base_url.clone(),
        config.templates.clone(),
        config.debug,
    ));
    let pool = ConcurrentProbe::new(config.threads);

    pool.execute(
        config.modules.clone(),
        move |module: String| {
            let probe = probe.clone();
            let fetcher = fetcher.clone();
            async move { probe.probe(&module, fetcher.as_ref()).await }
        },
        |outcome| {
            result.scanned += 1;
            if let Some(ProbeOutcome::Matched(found)) = outcome {
                tracing::debug!("{} found at {} ({})", found.module, found.url, found.status);
                sink.on_match(&found);
                result.matches.push(found);
            }
            sink.on_progress(result.scanned, total);
        },
    )
    .await;

    let (completed, errors) = pool.get_stats();
    result.errors = errors;
    result.elapsed = started.elapsed();
    tracing::info!(
        "Module scan finished: {}/{} found, {} probes completed, {} failed, in {:?}",
        result.found(),
        total,
        completed,
        errors,
        result.elapsed
    );
    sink.on_complete(&result);
    Ok(result)
}
