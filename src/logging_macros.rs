//! Tracing macros that prefix every message with `[file:module:line]`.
//!
//! Use them instead of bare `tracing::info!` so log lines point back at the
//! call site. Keep them out of per-frame code paths: the egui update loop runs
//! every frame, so only log on state transitions and user actions.
//!
//! Levels:
//! - `trace_debug!` for view state transitions (tab switches, card toggles)
//! - `trace_info!` for user-visible actions and start-up milestones
//! - `trace_warn!` / `trace_error!` for fallbacks and failed start-up steps

#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)*) => {
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}
