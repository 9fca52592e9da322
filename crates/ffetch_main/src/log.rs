use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, filter};

const LOG_ENV: &str = "FFETCH_LOG";

/// Installs the global subscriber.
///
/// `FFETCH_LOG` takes precedence over the `verbose` default. With a
/// `log_dir`, events go to a daily rolling JSON file; otherwise they are
/// written to standard error.
pub fn init_tracing(log_dir: Option<PathBuf>, verbose: bool) -> anyhow::Result<Guard> {
    let level = if verbose { "ffetch=debug" } else { "ffetch=info" };
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    // Only our own crates log; dependencies stay quiet.
    let own_crates = || filter::filter_fn(|metadata| metadata.target().starts_with("ffetch_"));

    let (file_layer, guard) = match log_dir {
        Some(log_dir) => {
            let (writer, guard) = prepare_writer(log_dir);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_timer(tracing_subscriber::fmt::time::uptime())
                .with_thread_ids(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
                .with_filter(own_crates());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = file_layer.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(own_crates())
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    debug!("Logging initialized");
    Ok(Guard(guard))
}

fn prepare_writer(log_dir: PathBuf) -> (non_blocking::NonBlocking, WorkerGuard) {
    let append = tracing_appender::rolling::daily(log_dir, "ffetch.log");
    tracing_appender::non_blocking(append)
}

/// Keeps the background log writer alive until dropped.
pub struct Guard(#[allow(dead_code)] Option<WorkerGuard>);
