use tauri::{AppHandle, Manager};

use crate::{
    lifecycle::LifecycleCommand, main_window, window_config::MainWindowConfig, LifecycleState,
};

pub fn apply_lifecycle_command<F>(app_handle: &AppHandle, command: LifecycleCommand, log: F)
where
    F: Fn(&str),
{
    match command {
        LifecycleCommand::CreateWindow { label } => create_window(app_handle, &label, log),
        LifecycleCommand::ShowWindow { label } => {
            main_window::show_window(app_handle, &label, &log);
            log(&format!("window '{label}' shown after ready-to-show"));
        }
    }
}

fn create_window<F>(app_handle: &AppHandle, label: &str, log: F)
where
    F: Fn(&str),
{
    match main_window::create_main_window(app_handle, label, &MainWindowConfig::default()) {
        Ok(_) => log(&format!("window '{label}' created hidden, waiting for content")),
        Err(error) => {
            log(&error);
            app_handle
                .state::<LifecycleState>()
                .with_controller(|controller| controller.on_window_creation_failed(label));
        }
    }
}

pub fn dispatch_lifecycle<F, L>(app_handle: &AppHandle, event: F, log: L)
where
    F: FnOnce(&mut crate::lifecycle::LifecycleController) -> Option<LifecycleCommand>,
    L: Fn(&str),
{
    let command = app_handle
        .state::<LifecycleState>()
        .with_controller(event);
    if let Some(command) = command {
        apply_lifecycle_command(app_handle, command, log);
    }
}
