// File: crates/playground-chart/src/tooltip.rs
// Summary: Tooltip content, styling and viewport-aware placement.

use chrono::{DateTime, Utc};

use crate::config::{ChartConfig, TooltipAnchor};
use crate::scene::TooltipElement;
use crate::text::TextMeasure;
use crate::theme::Theme;
use crate::time::long_date;
use crate::types::Viewport;

const BORDER_WIDTH: f64 = 1.0;

/// "42°F on January 15, 2024".
pub fn tooltip_text(value: f64, at: DateTime<Utc>) -> String {
    format!("{value}°F on {}", long_date(at))
}

/// A hidden tooltip styled from the theme.
pub fn new_tooltip(theme: &Theme, cfg: &ChartConfig) -> TooltipElement {
    let style = [
        ("position", "fixed".to_string()),
        ("background-color", theme.tooltip_background.clone()),
        ("border", "solid".to_string()),
        ("z-index", "9999".to_string()),
        ("border-color", theme.divider.clone()),
        ("color", theme.tooltip_text.clone()),
        ("border-width", format!("{BORDER_WIDTH}px")),
        ("border-radius", "8px".to_string()),
        ("padding", format!("{}px", cfg.tooltip_padding)),
        ("font-size", format!("{}px", cfg.tooltip_font_size)),
        ("white-space", "nowrap".to_string()),
    ];
    TooltipElement::hidden(style.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

/// Outer width of the tooltip box holding `text`.
pub fn tooltip_width(text: &str, cfg: &ChartConfig, measure: &dyn TextMeasure) -> f64 {
    let inner = measure.measure_width(text, cfg.tooltip_font_size as f32) as f64;
    inner + 2.0 * (cfg.tooltip_padding + BORDER_WIDTH)
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipPlacement {
    /// CSS `left`, before the transform.
    pub left: f64,
    /// CSS `top`, before the transform.
    pub top: f64,
    pub transform: String,
    /// Client x of the box's left edge after the transform.
    pub box_left: f64,
}

/// Position the tooltip over a point of the plot.
///
/// `plot_left`/`plot_top` are the client coordinates of the interaction rectangle,
/// `x`/`y` the point inside it. The box is centered above `x`; when that would cross
/// `viewport_margin` on either side it is pinned flush to that margin instead.
pub fn place_tooltip(
    plot_left: f64,
    plot_top: f64,
    x: f64,
    y: f64,
    width: f64,
    viewport: &Viewport,
    cfg: &ChartConfig,
) -> TooltipPlacement {
    let margin = cfg.viewport_margin;
    let anchor_y = match cfg.tooltip_anchor {
        TooltipAnchor::Top => 0.0,
        TooltipAnchor::Point => y,
    };
    let top = plot_top + anchor_y;
    let mut left = plot_left + x;
    let mut shift = -50;
    let mut box_left = left - width / 2.0;

    if box_left + width > viewport.width - margin {
        left = viewport.width - width - margin;
        shift = 0;
        box_left = left;
    }
    if box_left < margin {
        left = margin;
        shift = 0;
        box_left = left;
    }

    let lift = cfg.tooltip_anchor.lift();
    TooltipPlacement { left, top, transform: format!("translate({shift}%, calc(-100% - {lift}px))"), box_left }
}
