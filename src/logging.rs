//! Tracing setup for embedding applications and tests.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a stderr subscriber. Safe to call more than once; only the first
/// call wins.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
