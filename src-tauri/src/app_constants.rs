pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const APP_CONTENT_ENTRY: &str = "index.html";
pub(crate) const APP_WINDOW_TITLE: &str = "Lantern";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DEFAULT_ROOT_DIR_NAME: &str = ".lantern";
pub(crate) const ROOT_DIR_ENV: &str = "LANTERN_ROOT";
pub(crate) const LOG_MAX_BYTES_ENV: &str = "LANTERN_DESKTOP_LOG_MAX_BYTES";
pub(crate) const DEFAULT_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;
