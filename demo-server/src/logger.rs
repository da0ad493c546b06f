//! Tracing setup for the demo binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "demo_server=info,reply_core=info";
const VERBOSE_DIRECTIVES: &str = "demo_server=debug,reply_core=debug,info";

/// `--verbose` always selects the debug directives, even when `RUST_LOG` is
/// set. Without it `RUST_LOG` applies, falling back to info for both crates.
fn directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return VERBOSE_DIRECTIVES.to_string();
    }
    rust_log
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

pub fn init_logger(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    // An unparsable RUST_LOG falls back to the defaults.
    let filter = EnvFilter::try_new(directives(verbose, rust_log))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();
}
