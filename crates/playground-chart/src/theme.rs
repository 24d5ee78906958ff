// File: crates/playground-chart/src/theme.rs
// Summary: Host theme tokens (CSS colors) with light/dark presets.

use serde::{Deserialize, Serialize};

/// Styling tokens supplied by the host on every render. The chart never mutates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Axis lines, crosshairs, tooltip border and the idle dot stroke.
    pub divider: String,
    /// Dot stroke while hovered.
    pub primary: String,
    /// Axis tick labels.
    pub text_secondary: String,
    pub tooltip_background: String,
    pub tooltip_text: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".into(),
            divider: "rgba(0, 0, 0, 0.12)".into(),
            primary: "#1976d2".into(),
            text_secondary: "rgba(0, 0, 0, 0.6)".into(),
            tooltip_background: "#444".into(),
            tooltip_text: "#fff".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            divider: "rgba(255, 255, 255, 0.12)".into(),
            primary: "#90caf9".into(),
            text_secondary: "rgba(255, 255, 255, 0.7)".into(),
            tooltip_background: "#444".into(),
            tooltip_text: "#fff".into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
