use crate::utils::config::get_env_or_default;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global tracing subscriber
///
/// The level comes from `LOGLEVEL` (`ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`),
/// defaulting to `INFO`. Output goes to standard error because standard output
/// carries the export itself. Safe to call more than once.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = get_env_or_default("LOGLEVEL", Level::INFO);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global tracing subscriber already set");
        }
    });
}
