use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::{DEFAULT_LOG_MAX_BYTES, LOG_MAX_BYTES_ENV};

pub fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    root_dir
        .unwrap_or_else(env::temp_dir)
        .join("logs")
        .join(file_name)
}

pub fn resolve_log_max_bytes() -> u64 {
    parse_log_max_bytes(env::var(LOG_MAX_BYTES_ENV).ok().as_deref())
}

fn parse_log_max_bytes(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_LOG_MAX_BYTES)
}

pub fn format_log_line(timestamp: DateTime<Local>, scope: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
        scope,
        message
    )
}

fn backup_path(log_path: &Path) -> PathBuf {
    let mut file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    file_name.push(".1");
    log_path.with_file_name(file_name)
}

fn rotate_if_needed(log_path: &Path, max_bytes: u64) -> Result<(), String> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(format!(
                "Failed to stat desktop log {}: {}",
                log_path.display(),
                error
            ));
        }
    };
    if size < max_bytes {
        return Ok(());
    }

    let backup = backup_path(log_path);
    if backup.exists() {
        fs::remove_file(&backup).map_err(|error| {
            format!(
                "Failed to remove old desktop log backup {}: {}",
                backup.display(),
                error
            )
        })?;
    }
    fs::rename(log_path, &backup).map_err(|error| {
        format!(
            "Failed to rotate desktop log {} to {}: {}",
            log_path.display(),
            backup.display(),
            error
        )
    })
}

pub fn append_log_line(
    log_path: &Path,
    scope: &str,
    message: &str,
    max_bytes: u64,
) -> Result<(), String> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create desktop log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }
    rotate_if_needed(log_path, max_bytes)?;

    let line = format_log_line(Local::now(), scope, message);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| {
            format!(
                "Failed to open desktop log {}: {}",
                log_path.display(),
                error
            )
        })?;
    file.write_all(line.as_bytes()).map_err(|error| {
        format!(
            "Failed to write desktop log {}: {}",
            log_path.display(),
            error
        )
    })
}
