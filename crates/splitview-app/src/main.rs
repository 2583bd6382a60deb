mod app;
mod cli;
mod host;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use splitview_common::SplitViewError;
use splitview_config::{
    load_config, load_from_path, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore,
    SplitViewConfig,
};

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- SplitView crashed ---");
        eprintln!("Please report this issue at: https://github.com/dylan/splitview/issues");
        eprintln!("-------------------------\n");
        default_hook(info);
    }));
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config is loaded before logging is initialized so its logging.level
    // can act as the fallback directive; load errors are reported after.
    let config_result = match &args.config {
        Some(path) => load_from_path(Path::new(path)),
        None => load_config(),
    };
    let (config, config_err) = match config_result {
        Ok(config) => (config, None),
        Err(e) => (SplitViewConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "splitview=info".parse().unwrap()),
            ),
        )
        .init();

    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    tracing::info!("SplitView v{} starting...", env!("CARGO_PKG_VERSION"));

    let minimal = args.minimal || config.panel.minimal;

    let store: Box<dyn PreferenceStore> = if args.no_persist || minimal {
        Box::new(MemoryPreferenceStore::new())
    } else {
        match FilePreferenceStore::open_default() {
            Ok(store) => {
                tracing::info!("preference store at {}", store.path().display());
                Box::new(store)
            }
            Err(e) => {
                tracing::warn!("Preference store unavailable, running in-memory: {e}");
                Box::new(MemoryPreferenceStore::new())
            }
        }
    };

    if let Err(e) = run(config, store, minimal, args.url) {
        tracing::error!("SplitView exited with error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn run(
    config: SplitViewConfig,
    store: Box<dyn PreferenceStore>,
    minimal: bool,
    url: Option<String>,
) -> splitview_common::Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| SplitViewError::Other(format!("failed to create event loop: {e}")))?;
    let mut app = app::PreviewApp::new(config, store, minimal, url);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| SplitViewError::Other(format!("event loop: {e}")))?;
    Ok(())
}
