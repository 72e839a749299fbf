#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use promptsheet::app::catalog;
use promptsheet::{trace_error, trace_info, trace_warn};
use tracing_subscriber::prelude::*;

const DEFAULT_LOG_FILTER: &str = "promptsheet=info,eframe=info,egui=warn,egui_glow=warn,glow=warn,wgpu_core=warn,wgpu_hal=warn,winit=warn";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "", "promptsheet")
}

fn init_logging() {
    let Some(proj_dirs) = project_dirs() else {
        eprintln!("No home directory found, logging disabled");
        return;
    };

    let log_dir = proj_dirs.data_dir().join("logs");
    let _ = std::fs::create_dir_all(&log_dir);
    let log_path = log_dir.join("promptsheet.log");

    let file = match std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return;
        }
    };

    // Owner read/write only
    #[cfg(unix)]
    let permissions_error = {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&log_path, std::fs::Permissions::from_mode(0o600)).err()
    };

    // RUST_LOG wins over the built-in levels
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::builder().parse(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false),
    );

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return;
    }

    // eframe and winit log through the `log` crate
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize log-to-tracing bridge: {}", e);
    }

    #[cfg(unix)]
    {
        if let Some(e) = permissions_error {
            trace_warn!("Failed to restrict log file permissions: {}", e);
        }
    }

    trace_info!("Logging initialized to: {:?}", log_path);
}

fn setup_panic_handler() {
    // Writes a crash report even when logging never came up
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Prompt Sheet crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        eprintln!("\n{}", crash_msg);

        if let Some(proj_dirs) = project_dirs() {
            let log_dir = proj_dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
                eprintln!("Crash log written to: {:?}", crash_log_path);
            }
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_handler();
    init_logging();

    trace_info!(
        "promptsheet {} ({}) starting",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_COMMIT")
    );

    if let Err(e) = catalog::verify_catalog(catalog::principles(), catalog::categories()) {
        trace_error!("Catalog check failed: {:#}", e);
        return Err(e.into());
    }
    trace_info!(
        "Catalog verified: {} principles in {} categories",
        catalog::principles().len(),
        catalog::categories().len() - 1
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Prompt Sheet")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([360.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Prompt Sheet",
        native_options,
        Box::new(|cc| Ok(Box::new(promptsheet::PromptSheetApp::new(cc)))),
    )?;

    Ok(())
}
