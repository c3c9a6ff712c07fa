#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_helpers;
mod app_runtime;
mod app_types;
mod desktop_bridge_commands;
mod exit_events;
mod external_url;
mod lifecycle;
mod logging;
mod main_window;
mod navigation_policy;
mod runtime_paths;
mod startup_signal;
mod token_estimate;
mod window_actions;
mod window_config;

pub(crate) use app_constants::*;
pub(crate) use app_helpers::{append_desktop_log, append_shutdown_log, append_startup_log};
pub(crate) use app_types::{BridgeResult, ChunkSplitResult, CostEstimateResult, LifecycleState};

fn main() {
    app_runtime::run();
}
