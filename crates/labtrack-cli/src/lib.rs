//! labtrack command-line host
//!
//! Wires configuration, logging, the file-backed store and the views into
//! a set of subcommands. The binary in `main.rs` is a thin wrapper over
//! [`run`].

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod track;

pub use cli::build_cli;
pub use commands::{execute, RunContext};
pub use config::{ConfigError, TrackerConfig};

use anyhow::Result;
use clap::ArgMatches;
use labtrack_model::ProjectId;
use labtrack_persist::{FileBackend, Gateway};
use labtrack_store::{ProjectStore, SharedStore};
use labtrack_views::format::format_duration;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Effective configuration: `--config` file (or defaults) plus overrides
///
/// # Errors
/// Returns [`ConfigError`] if the config file exists but is unusable.
pub fn resolve_config(matches: &ArgMatches) -> Result<TrackerConfig, ConfigError> {
    let path = global_path(matches, "config");
    let mut config = TrackerConfig::load_or_default(path.map(PathBuf::as_path))?;
    if let Some(dir) = global_path(matches, "data-dir") {
        config.data_dir.clone_from(dir);
    }
    Ok(config)
}

/// Global flag value given either before or after the subcommand
fn global_path<'a>(matches: &'a ArgMatches, name: &str) -> Option<&'a PathBuf> {
    matches.get_one::<PathBuf>(name).or_else(|| {
        matches
            .subcommand()
            .and_then(|(_, args)| args.get_one::<PathBuf>(name))
    })
}

/// Install the `fmt` subscriber; `RUST_LOG` wins over the configured filter
pub fn init_tracing(config: &TrackerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let installed = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

/// Run parsed arguments against the configured data directory
///
/// # Errors
/// Propagates handler failures.
pub async fn run(matches: &ArgMatches, config: &TrackerConfig) -> Result<()> {
    let gateway = Gateway::new(FileBackend::new(&config.data_dir));
    let mut store = ProjectStore::hydrate(gateway);
    let ctx = RunContext {
        views: &config.views,
        today: labtrack_views::today(),
    };

    let Some((name, args)) = matches.subcommand() else {
        return Ok(());
    };

    if name == "track" {
        let id = ProjectId::from_raw(
            args.get_one::<String>("id")
                .cloned()
                .unwrap_or_default(),
        );
        let shared = SharedStore::new(store);
        let stop = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            }
        };
        eprintln!("Tracking {id}, press Ctrl-C to stop");
        let total = track::track(shared, id, stop, |session| {
            eprint!(
                "\rSession {}  Total {}",
                format_duration(session.session_secs()),
                format_duration(session.display_total())
            );
        })
        .await?;
        eprintln!();
        println!("Total tracked: {}", format_duration(total));
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&mut store, ctx, name, args, &mut out)?;
    out.flush()?;
    Ok(())
}
