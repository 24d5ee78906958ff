// File: crates/playground-chart/src/config.rs
// Summary: Widget configuration with serde-backed overrides and validation.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::Insets;

/// Vertical anchor of the hover tooltip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TooltipAnchor {
    /// Pinned to the top edge of the plot area.
    #[default]
    Top,
    /// Follows the hovered point.
    Point,
}

impl TooltipAnchor {
    /// Gap between the anchor and the tooltip's bottom edge, in pixels.
    pub fn lift(&self) -> f64 {
        match self {
            TooltipAnchor::Top => 8.0,
            TooltipAnchor::Point => 20.0,
        }
    }
}

/// What ingestion does with records that cannot be plotted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRecordPolicy {
    /// Drop the record and log a warning.
    #[default]
    Skip,
    /// Fail the whole render pass; the scene stays empty.
    Reject,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub margins: Insets,
    pub line_stroke_width: f64,
    pub dot_radius: f64,
    pub dot_stroke_width: f64,
    pub tooltip_anchor: TooltipAnchor,
    /// Minimum distance between the tooltip and the viewport edges.
    pub viewport_margin: f64,
    pub gradient_ticks: usize,
    pub y_ticks: usize,
    pub x_ticks: usize,
    pub y_tick_suffix: String,
    /// Rotation of bottom axis labels, in degrees.
    pub x_label_rotation: f64,
    pub tooltip_font_size: f64,
    pub tooltip_padding: f64,
    pub invalid_records: InvalidRecordPolicy,
    pub date_field: String,
    pub value_field: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margins: Insets::default(),
            line_stroke_width: 2.0,
            dot_radius: 8.0,
            dot_stroke_width: 2.0,
            tooltip_anchor: TooltipAnchor::Top,
            viewport_margin: 16.0,
            gradient_ticks: 10,
            y_ticks: 10,
            x_ticks: 10,
            y_tick_suffix: " F".to_string(),
            x_label_rotation: 30.0,
            tooltip_font_size: 14.0,
            tooltip_padding: 8.0,
            invalid_records: InvalidRecordPolicy::Skip,
            date_field: "date".to_string(),
            value_field: "temperature".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse overrides from JSON; missing keys keep their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| ChartError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("line_stroke_width", self.line_stroke_width),
            ("dot_radius", self.dot_radius),
            ("dot_stroke_width", self.dot_stroke_width),
            ("viewport_margin", self.viewport_margin),
            ("tooltip_font_size", self.tooltip_font_size),
            ("tooltip_padding", self.tooltip_padding),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(ChartError::Config(format!("`{name}` must be a non-negative number, got {v}")));
            }
        }
        if !self.x_label_rotation.is_finite() {
            return Err(ChartError::Config("`x_label_rotation` must be finite".into()));
        }
        for (name, n) in [("gradient_ticks", self.gradient_ticks), ("y_ticks", self.y_ticks), ("x_ticks", self.x_ticks)] {
            if n == 0 {
                return Err(ChartError::Config(format!("`{name}` must be at least 1")));
            }
        }
        if self.date_field.is_empty() || self.value_field.is_empty() {
            return Err(ChartError::Config("field names must not be empty".into()));
        }
        Ok(())
    }
}
