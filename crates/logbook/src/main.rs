//! Logbook - Browse a repository's history as a classified changelog

mod cli;
mod exit_codes;

use std::path::PathBuf;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::{output, Cli};

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(&cli);

    if let Err(err) = cli.execute() {
        output::error(&format!("{:#}", err));
        std::process::exit(exit_codes::for_error(&err));
    }
}

/// Console events go to stderr so page output on stdout stays clean.
/// `--log-file` adds a debug-level JSON trail of every git query and page load.
fn init_tracing(cli: &Cli) -> Option<WorkerGuard> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        );

    let (file, guard) = match cli.log_file.then(session_log_dir).flatten() {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "sessions.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(EnvFilter::new("logbook=debug,logbook_git=debug,logbook_changelog=debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();
    guard
}

/// `<data dir>/logbook/logs`, created on demand
fn session_log_dir() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join("logbook").join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
