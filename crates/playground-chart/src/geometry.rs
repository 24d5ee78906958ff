// File: crates/playground-chart/src/geometry.rs
// Summary: Per-render geometry (dimensions, scales, gradient) and the plot rectangle.

use crate::color::{gradient_stops, GradientStop};
use crate::config::ChartConfig;
use crate::record::{DataPoint, Series};
use crate::scale::{LinearScale, TimeScale};
use crate::types::Dimensions;

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
    /// Edges inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Everything derived from one dataset and one size. Rebuilt on every render.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub dims: Dimensions,
    pub x: TimeScale,
    pub y: LinearScale,
    pub stops: Vec<GradientStop>,
}

impl Geometry {
    /// `None` for an empty series: there is no extent to scale.
    pub fn build(series: &Series, dims: Dimensions, cfg: &ChartConfig) -> Option<Self> {
        let (x0, x1) = series.x_extent()?;
        let (y0, y1) = series.y_extent()?;
        let y = LinearScale::new((y0, y1), (dims.container_height, 0.0)).nice(cfg.y_ticks);
        let x = TimeScale::new((x0, x1), (0.0, dims.container_width));
        Some(Self { dims, x, y, stops: gradient_stops(cfg.gradient_ticks) })
    }

    /// Container-local pixel position of a point.
    #[inline]
    pub fn project(&self, p: &DataPoint) -> (f64, f64) {
        (self.x.map(p.at), self.y.map(p.value))
    }

    /// The interaction rectangle, in container-local pixels.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltwh(0.0, 0.0, self.dims.container_width, self.dims.container_height)
    }
}
