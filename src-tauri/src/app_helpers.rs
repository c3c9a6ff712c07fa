use crate::{logging, runtime_paths, DESKTOP_LOG_FILE};

fn append_scoped_log(scope: &str, message: &str) {
    if cfg!(debug_assertions) {
        eprintln!("[{scope}] {message}");
    }

    let log_path = logging::resolve_desktop_log_path(
        runtime_paths::default_packaged_root_dir(),
        DESKTOP_LOG_FILE,
    );
    if let Err(error) = logging::append_log_line(
        &log_path,
        scope,
        message,
        logging::resolve_log_max_bytes(),
    ) {
        eprintln!("{error}");
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_scoped_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_scoped_log("startup", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_scoped_log("shutdown", message);
}
