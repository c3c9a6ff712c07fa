use std::{
    process::{Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
};
use url::Url;

pub fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" | "mailto" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https/mailto are allowed."
        )),
    }
}

/// Spawns a handler process and reaps it on a detached thread so finished
/// handlers never linger as zombies.
fn spawn_reaped(
    command: &mut Command,
    program: &str,
) -> Result<JoinHandle<Option<ExitStatus>>, String> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|error| format!("Failed to run '{program}': {error}"))?;
    Ok(thread::spawn(move || child.wait().ok()))
}

#[cfg(target_os = "macos")]
fn open_with_default_handler(url: &str) -> Result<(), String> {
    spawn_reaped(Command::new("open").arg(url), "open").map(|_| ())
}

#[cfg(target_os = "windows")]
fn open_with_default_handler(url: &str) -> Result<(), String> {
    spawn_reaped(
        Command::new("rundll32").args(["url.dll,FileProtocolHandler", url]),
        "rundll32",
    )
    .map(|_| ())
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_with_default_handler(url: &str) -> Result<(), String> {
    spawn_reaped(Command::new("xdg-open").arg(url), "xdg-open").map(|_| ())
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_with_default_handler(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

/// Hands an already validated URL to the operating system's default handler.
pub fn open_external_url(url: &Url) -> Result<(), String> {
    open_with_default_handler(url.as_str())
}
