// Shared command line plumbing for the two filters: log level flag + stderr logging.

use clap::Args;
use tracing::Level;

#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

impl LogArgs {
    pub fn level(&self) -> Level {
        parse_level(&self.log_level)
    }
}

pub fn parse_level(s: &str) -> Level {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// stdout carries the data, so logs always go to stderr.
pub fn init_logging(args: &LogArgs) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(args.level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
