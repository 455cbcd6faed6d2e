//! External theme asset loaded at startup.
//!
//! The theme is a small TOML file of `#rrggbb` / `#rrggbbaa` colors applied
//! to `egui::Visuals` before the first frame. The file is a required asset:
//! a missing or unparsable theme halts startup, the same as a missing API
//! key. The shipped default lives at `assets/japanese_theme.toml`.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use egui::Color32;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// RawTheme — the on-disk shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawTheme {
    window: String,
    panel: String,
    text: String,
    muted: String,
    accent: String,
    user_bubble: String,
    assistant_bubble: String,
    error: String,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Resolved theme colors, parsed once at startup.
#[derive(Debug, Clone)]
pub struct Theme {
    pub window: Color32,
    pub panel: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub user_bubble: Color32,
    pub assistant_bubble: Color32,
    pub error: Color32,
}

impl Theme {
    /// Read and parse the theme file. Any failure (missing file, bad TOML,
    /// bad color literal) is an error the caller treats as fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme file {}", path.display()))?;
        let raw: RawTheme = toml::from_str(&content)
            .with_context(|| format!("failed to parse theme file {}", path.display()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawTheme) -> Result<Self> {
        let color = |name: &str, value: &str| -> Result<Color32> {
            parse_hex(value).ok_or_else(|| anyhow!("theme color `{name}` is not a valid hex color: {value:?}"))
        };

        Ok(Self {
            window: color("window", &raw.window)?,
            panel: color("panel", &raw.panel)?,
            text: color("text", &raw.text)?,
            muted: color("muted", &raw.muted)?,
            accent: color("accent", &raw.accent)?,
            user_bubble: color("user_bubble", &raw.user_bubble)?,
            assistant_bubble: color("assistant_bubble", &raw.assistant_bubble)?,
            error: color("error", &raw.error)?,
        })
    }

    /// Apply the theme to the egui context (dark base + our overrides).
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = self.window;
        visuals.panel_fill = self.panel;
        visuals.override_text_color = Some(self.text);
        visuals.hyperlink_color = self.accent;
        ctx.set_visuals(visuals);
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` into a [`Color32`].
fn parse_hex(s: &str) -> Option<Color32> {
    let hex = s.strip_prefix('#')?;
    let byte = |range: std::ops::Range<usize>| -> Option<u8> {
        u8::from_str_radix(hex.get(range)?, 16).ok()
    };

    match hex.len() {
        6 => Some(Color32::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Some(Color32::from_rgba_unmultiplied(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)?,
        )),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
