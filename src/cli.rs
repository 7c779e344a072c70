use std::path::PathBuf;

use clap::Parser;
use module_hunter::config::{DEFAULT_THREADS, DEFAULT_USER_AGENT};

/// Enumerate installed Drupal modules by probing well-known module paths
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target Drupal site base URL
    pub url: String,

    /// Path to file with module names, one per line
    pub wordlist: PathBuf,

    /// Custom User-Agent string
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Number of concurrent workers
    #[arg(long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Proxy URL for HTTP and HTTPS traffic (e.g. http://127.0.0.1:8080)
    #[arg(long)]
    pub proxy: Option<String>,

    /// Disable TLS certificate validation
    #[arg(long, default_value_t = false)]
    pub insecure: bool,

    /// Print request failures for debugging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,

    /// Replace the built-in path templates with those in FILE ({mod} is the module name)
    #[arg(long, value_name = "FILE")]
    pub paths: Option<PathBuf>,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
