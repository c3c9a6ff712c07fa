use serde_json::json;

use crate::{lifecycle::Platform, APP_CONTENT_ENTRY, APP_WINDOW_TITLE};

const PRELOAD_SCRIPT: &str = include_str!("../scripts/preload.js");

#[derive(Debug, Clone)]
pub struct MainWindowConfig {
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    pub background_color: &'static str,
    pub visible_on_create: bool,
    /// Content extends under the title bar and the title text is hidden. Only
    /// macOS has a native equivalent; other platforms keep their default bar.
    pub inset_title_bar: bool,
    pub content_entry: &'static str,
    pub remove_menu: bool,
}

impl Default for MainWindowConfig {
    fn default() -> Self {
        Self {
            title: APP_WINDOW_TITLE,
            width: 1240.0,
            height: 900.0,
            background_color: "#0b0f14",
            visible_on_create: false,
            inset_title_bar: true,
            content_entry: APP_CONTENT_ENTRY,
            remove_menu: true,
        }
    }
}

impl MainWindowConfig {
    pub fn background_rgba(&self) -> Result<(u8, u8, u8, u8), String> {
        parse_hex_color(self.background_color)
    }

    /// Preload script with the shell metadata prepended as a JSON literal.
    pub fn initialization_script(&self, platform: Platform) -> String {
        let shell_info = json!({ "platform": platform.as_str() });
        format!("window.__LANTERN_SHELL__ = {shell_info};\n{PRELOAD_SCRIPT}")
    }
}

pub fn parse_hex_color(raw: &str) -> Result<(u8, u8, u8, u8), String> {
    let hex = raw
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| format!("Invalid color '{raw}': expected a leading '#'."))?;
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "Invalid color '{raw}': expected #rrggbb or #rrggbbaa."
        ));
    }

    let channel = |index: usize| {
        u8::from_str_radix(&hex[index..index + 2], 16)
            .map_err(|error| format!("Invalid color '{raw}': {error}"))
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { 0xff };
    Ok((channel(0)?, channel(2)?, channel(4)?, alpha))
}
