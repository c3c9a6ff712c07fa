use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::{append_shutdown_log, lifecycle::ExitDecision, LifecycleState};

pub fn handle_exit_requested(app_handle: &AppHandle, code: Option<i32>, api: &ExitRequestApi) {
    let explicit = code.is_some();
    let state = app_handle.state::<LifecycleState>();
    let (decision, platform) = state.with_controller(|controller| {
        (
            controller.on_exit_requested(explicit),
            controller.platform(),
        )
    });

    match decision {
        ExitDecision::Exit => append_shutdown_log(&format!(
            "exit requested (code={code:?}), terminating on {}",
            platform.as_str()
        )),
        ExitDecision::KeepRunning => {
            api.prevent_exit();
            append_shutdown_log(&format!(
                "all windows closed, staying alive without windows on {}",
                platform.as_str()
            ));
        }
    }
}

pub fn handle_exit_event(app_handle: &AppHandle) {
    let phase = app_handle
        .state::<LifecycleState>()
        .with_controller(|controller| controller.phase());
    append_shutdown_log(&format!("desktop process exiting (phase={phase:?})"));
}
