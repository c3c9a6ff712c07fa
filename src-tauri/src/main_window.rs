use tauri::{
    webview::NewWindowResponse, window::Color, AppHandle, Manager, Url, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};

use crate::{
    append_desktop_log, external_url,
    lifecycle::Platform,
    navigation_policy::{self, NavigationDecision},
    window_config::MainWindowConfig,
};

fn dev_origin(app_handle: &AppHandle) -> Option<Url> {
    if !tauri::is_dev() {
        return None;
    }
    app_handle.config().build.dev_url.clone()
}

fn forward_to_default_handler(target: &Url, source: &str) {
    match external_url::open_external_url(target) {
        Ok(()) => append_desktop_log(&format!("{source}: opened {target} externally")),
        Err(error) => append_desktop_log(&format!(
            "{source}: failed to open {target} externally: {error}"
        )),
    }
}

fn handle_navigation(target: &Url, dev_origin: Option<&Url>) -> bool {
    match navigation_policy::decide_navigation(target, dev_origin) {
        NavigationDecision::AllowInWindow => true,
        NavigationDecision::OpenExternally(url) => {
            forward_to_default_handler(&url, "navigation");
            false
        }
        NavigationDecision::Block => {
            append_desktop_log(&format!("navigation blocked: {target}"));
            false
        }
    }
}

fn handle_new_window_intent(target: &Url, dev_origin: Option<&Url>) {
    match navigation_policy::decide_new_window(target, dev_origin) {
        NavigationDecision::OpenExternally(url) => forward_to_default_handler(&url, "window-open"),
        NavigationDecision::AllowInWindow | NavigationDecision::Block => {
            append_desktop_log(&format!("window-open denied: {target}"));
        }
    }
}

/// Builds a hidden content window. Navigation and window-open handlers are
/// attached on the builder so they are in place before the content loads.
pub fn create_main_window(
    app_handle: &AppHandle,
    label: &str,
    config: &MainWindowConfig,
) -> Result<WebviewWindow, String> {
    let (red, green, blue, alpha) = config.background_rgba()?;
    let navigation_origin = dev_origin(app_handle);
    let new_window_origin = navigation_origin.clone();

    let builder = WebviewWindowBuilder::new(
        app_handle,
        label,
        WebviewUrl::App(config.content_entry.into()),
    )
    .title(config.title)
    .inner_size(config.width, config.height)
    .background_color(Color(red, green, blue, alpha))
    .visible(config.visible_on_create)
    .initialization_script(&config.initialization_script(Platform::current()))
    .on_navigation(move |target| handle_navigation(target, navigation_origin.as_ref()))
    .on_new_window(move |target, _features| {
        handle_new_window_intent(&target, new_window_origin.as_ref());
        NewWindowResponse::Deny
    });

    #[cfg(target_os = "macos")]
    let builder = if config.inset_title_bar {
        builder
            .title_bar_style(tauri::TitleBarStyle::Overlay)
            .hidden_title(true)
    } else {
        builder
    };

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create window '{label}': {error}"))?;

    if config.remove_menu {
        if let Err(error) = window.remove_menu() {
            append_desktop_log(&format!("failed to remove menu from window '{label}': {error}"));
        }
    }

    Ok(window)
}

pub fn show_window<F>(app_handle: &AppHandle, label: &str, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(label) else {
        log(&format!("show_window skipped: window '{label}' not found"));
        return;
    };

    if let Err(error) = window.show() {
        log(&format!("failed to show window '{label}': {error}"));
        return;
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus window '{label}': {error}"));
    }
}
