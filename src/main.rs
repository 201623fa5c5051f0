//! Terminal host for stateful dialog flows
//!
//! Usage: `stateful-dialog [FLOW_JSON]`. Settings not given on the command
//! line come from `DIALOG_*` environment variables.

use stateful_dialog::config::DialogConfig;
use stateful_dialog::runtime::{self, DialogRuntime, FileSnapshotStore, MemorySnapshotStore, SnapshotStore};
use stateful_dialog::{DialogContext, DialogEngine};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the dialog itself
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stateful_dialog=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = DialogConfig::from_env().with_flow_path(std::env::args_os().nth(1).map(PathBuf::from));
    let flow_path = config.flow_path()?;

    tracing::info!(path = %flow_path.display(), "Loading flow");
    let flow = runtime::load_flow(flow_path)?;
    if let Some(meta) = flow.metadata() {
        tracing::info!(flow_type = %meta.flow_type, priority = ?meta.priority(), "Flow metadata");
    }

    let store: Box<dyn SnapshotStore> = match &config.snapshot_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Persisting progress to file");
            Box::new(FileSnapshotStore::new(path))
        }
        None => Box::new(MemorySnapshotStore::new()),
    };

    let context = DialogContext::new(config.user_id.clone(), config.session_id.clone());
    let mut host = DialogRuntime::start(DialogEngine::new(flow), context, store)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if host.run(stdin.lock(), stdout.lock())?.is_none() {
        tracing::warn!(position = host.progress().position, "Dialog left unfinished");
    }

    Ok(())
}
