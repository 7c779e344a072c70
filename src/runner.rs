use crate::cli::Cli;
use module_hunter::output::ConsoleReporter;
use module_hunter::utils::{load_templates, load_wordlist};
use module_hunter::ScanConfig;

fn init_logging(cli: &Cli, reporter: &ConsoleReporter) {
    // Keep reqwest/hyper at INFO so --debug shows our transport errors, not theirs
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug { "debug" } else if cli.verbose { "info" } else { "warn" };
    let filter_str = format!(
        "module_hunter={level},reqwest=info,hyper=info,rustls=info",
        level = crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .with_writer(reporter.log_writer())
        .init();
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    let reporter = ConsoleReporter::new();
    init_logging(&cli, &reporter);

    println!("[i] Scanning: {}", cli.url);

    let modules = load_wordlist(&cli.wordlist)?;
    let mut config = ScanConfig::new(cli.url, modules)
        .with_user_agent(cli.user_agent)
        .with_threads(cli.threads)
        .with_proxy(cli.proxy)
        .with_verify_tls(!cli.insecure)
        .with_debug(cli.debug);
    if let Some(ref path) = cli.paths {
        config = config.with_templates(load_templates(path)?);
    }
    config.validate()?;

    tracing::info!(
        modules = config.modules.len(),
        threads = config.threads,
        proxy = ?config.proxy,
        verify_tls = config.verify_tls,
        "Loaded scan configuration"
    );

    module_hunter::scan(&config, &reporter).await?;
    Ok(())
}
