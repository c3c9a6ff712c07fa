use std::{env, ffi::OsString, path::PathBuf};

use crate::{DEFAULT_ROOT_DIR_NAME, ROOT_DIR_ENV};

pub fn default_packaged_root_dir() -> Option<PathBuf> {
    root_dir_from_override(env::var_os(ROOT_DIR_ENV))
        .or_else(|| home::home_dir().map(|home| home.join(DEFAULT_ROOT_DIR_NAME)))
}

fn root_dir_from_override(raw: Option<OsString>) -> Option<PathBuf> {
    let raw = raw?;
    let trimmed = raw.to_string_lossy().trim().to_string();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}
