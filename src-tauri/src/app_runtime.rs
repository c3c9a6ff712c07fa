use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_startup_log, exit_events,
    lifecycle::{ExitDecision, LifecycleController, Platform},
    startup_signal::{self, InstallerEvent},
    window_actions, LifecycleState, DESKTOP_LOG_FILE,
};

/// Runs the installer check ahead of any other startup work. An installer run
/// exits without creating windows or touching the desktop log.
fn begin_lifecycle(
    platform: Platform,
    installer_event: Option<InstallerEvent>,
) -> Option<LifecycleController> {
    let mut controller = LifecycleController::new(platform);
    match controller.on_startup_signal(installer_event.is_some()) {
        ExitDecision::Exit => None,
        ExitDecision::KeepRunning => Some(controller),
    }
}

pub(crate) fn run() {
    let platform = Platform::current();
    let Some(controller) =
        begin_lifecycle(platform, startup_signal::detect_installer_event(platform))
    else {
        std::process::exit(0);
    };

    append_startup_log(&format!(
        "desktop process starting on {}",
        platform.as_str()
    ));
    append_startup_log(&format!(
        "desktop log path: {}",
        crate::logging::resolve_desktop_log_path(
            crate::runtime_paths::default_packaged_root_dir(),
            DESKTOP_LOG_FILE,
        )
        .display()
    ));

    tauri::Builder::default()
        .manage(LifecycleState::new(controller))
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_is_desktop_runtime,
            crate::desktop_bridge_commands::desktop_bridge_open_external_url,
            crate::desktop_bridge_commands::desktop_bridge_estimate_cost,
            crate::desktop_bridge_commands::desktop_bridge_split_into_chunks,
        ])
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                let label = window.label().to_string();
                let remaining = window
                    .app_handle()
                    .state::<LifecycleState>()
                    .with_controller(|controller| {
                        controller.on_window_destroyed(&label);
                        controller.open_window_count()
                    });
                append_desktop_log(&format!(
                    "window '{label}' destroyed, {remaining} window(s) open"
                ));
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => {
                append_desktop_log(&format!("page-load started: {}", payload.url()));
            }
            PageLoadEvent::Finished => {
                append_desktop_log(&format!("page-load finished: {}", payload.url()));
                let label = webview.window().label().to_string();
                let app_handle = webview.app_handle();
                let (command, already_visible) = app_handle
                    .state::<LifecycleState>()
                    .with_controller(|controller| {
                        let command = controller.on_window_ready_to_show(&label);
                        (command, controller.is_window_visible(&label))
                    });
                match command {
                    Some(command) => window_actions::apply_lifecycle_command(
                        app_handle,
                        command,
                        append_desktop_log,
                    ),
                    None if already_visible == Some(true) => {}
                    None => append_desktop_log(&format!(
                        "ready-to-show ignored for untracked window '{label}'"
                    )),
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            append_startup_log("host runtime ready, creating first window");
            window_actions::dispatch_lifecycle(
                &app_handle,
                |controller| controller.on_ready(),
                append_startup_log,
            );
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(app_handle, code, &api);
            }
            RunEvent::Exit => {
                exit_events::handle_exit_event(app_handle);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                append_desktop_log("application activated");
                window_actions::dispatch_lifecycle(
                    app_handle,
                    |controller| controller.on_activate(),
                    append_desktop_log,
                );
            }
            _ => {}
        });
}
