// File: crates/playground-chart/src/types.rs
// Summary: Shared layout types (margins, per-render dimensions, host page geometry).

use serde::{Deserialize, Serialize};

/// Default outer margin on every side, in pixels.
pub const MARGIN: u32 = 50;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on all four sides.
    pub const fn uniform(m: u32) -> Self {
        Self::new(m, m, m, m)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(MARGIN)
    }
}

/// Transient per-render layout: outer size, margins and the inner plot container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margins: Insets,
    pub container_width: f64,
    pub container_height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, margins: Insets) -> Self {
        let width = sanitize(width);
        let height = sanitize(height);
        Self {
            width,
            height,
            margins,
            container_width: (width - margins.hsum() as f64).max(0.0),
            container_height: (height - margins.vsum() as f64).max(0.0),
        }
    }

    /// Nothing can be drawn into a zero-sized surface.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

/// Browser-style viewport size, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280.0, height: 800.0 }
    }
}

/// Where the host placed the drawing surface on the page.
///
/// `surface_left`/`surface_top` are the client coordinates of the surface's
/// top-left corner; the tooltip is positioned in the same client space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostLayout {
    pub surface_left: f64,
    pub surface_top: f64,
    pub viewport: Viewport,
}
