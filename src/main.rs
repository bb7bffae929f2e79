//! PopDash: an interactive country-wise population dashboard.
//!
//! Entry point: initialises structured logging, resolves the data file and
//! launches the eframe application window.

// Hide the console window in release builds on Windows.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Declare crate modules
mod app;
mod app_actions;
mod app_update;
mod core;
mod export;
mod ui;
mod util;

use tracing_subscriber::Layer as _;

use app::PopDashApp;
use crate::core::loader;
use util::constants;

fn main() -> eframe::Result<()> {
    // Dual-layer logging: stderr (env-controlled) + file (always debug).
    // The file log lives under the platform's local data directory.
    let log_dir = init_log_dir();
    init_logging(&log_dir);

    tracing::info!(
        "{} v{} starting",
        constants::APP_NAME,
        constants::APP_VERSION,
    );
    if let Some(dir) = &log_dir {
        tracing::info!("Log file: {}", dir.join(constants::LOG_FILE_NAME).display());
    }

    let data_path = loader::data_path_from_env();
    tracing::info!("Data file: {}", data_path.display());

    let viewport = egui::ViewportBuilder::default()
        .with_title(constants::DASHBOARD_TITLE)
        .with_inner_size([1280.0, 860.0])
        .with_min_inner_size([800.0, 500.0]);

    let options = eframe::NativeOptions {
        viewport,
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        constants::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(PopDashApp::new(cc, data_path)))),
    )
}

/// Create the persistent log directory under the local data directory.
///
/// Returns `Some(path)` to the log directory on success, `None` if the
/// directory cannot be created (logging falls back to stderr only).
fn init_log_dir() -> Option<std::path::PathBuf> {
    let log_dir = dirs::data_local_dir()?
        .join(constants::APP_DATA_DIR)
        .join(constants::LOG_DIR);
    std::fs::create_dir_all(&log_dir).ok()?;

    // Rotate the log file if it exceeds the size limit.
    let log_file = log_dir.join(constants::LOG_FILE_NAME);
    if let Ok(meta) = std::fs::metadata(&log_file) {
        if meta.len() > constants::MAX_LOG_FILE_SIZE {
            let backup = log_dir.join(format!("{}.old", constants::LOG_FILE_NAME));
            let _ = std::fs::rename(&log_file, &backup);
        }
    }

    Some(log_dir)
}

/// Initialise the dual-layer tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` env var (default: `info`).
/// - **file layer** (if `log_dir` is `Some`): always writes at `debug` level.
fn init_logging(log_dir: &Option<std::path::PathBuf>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(dir) = log_dir {
        let log_path = dir.join(constants::LOG_FILE_NAME);
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .with_filter(tracing_subscriber::EnvFilter::new("debug"));

            tracing_subscriber::registry()
                .with(stderr_layer.with_filter(env_filter))
                .with(file_layer)
                .init();
            return;
        }
    }

    // Fallback: stderr only
    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
