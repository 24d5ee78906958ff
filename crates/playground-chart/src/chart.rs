// File: crates/playground-chart/src/chart.rs
// Summary: Static scene renderer: container, gradient, line, axes, hover primitives and the interaction rectangle.

use std::fmt::Write as _;

use crate::axis::{Axis, AxisNodes};
use crate::color::gradient_stops;
use crate::config::ChartConfig;
use crate::geometry::Geometry;
use crate::record::Series;
use crate::scene::{NodeId, Surface, TooltipLayer};
use crate::theme::Theme;
use crate::tooltip::new_tooltip;
use crate::types::Dimensions;
use crate::uid::Uid;

pub const CONTAINER_CLASS: &str = "container";
pub const DOT_CLASS: &str = "tool-tip-dot";
pub const CROSSHAIR_CLASS: &str = "mouseLine";
pub const TRACKER_CLASS: &str = "mouse-tracker";

/// Elements drawn only when there is at least one point.
#[derive(Clone, Debug)]
pub struct PlotHandles {
    pub line: NodeId,
    pub y_axis: AxisNodes,
    pub x_axis: AxisNodes,
    pub dot: NodeId,
    pub vertical: NodeId,
    pub horizontal: NodeId,
    pub tracker: NodeId,
}

#[derive(Clone, Debug)]
pub struct SceneHandles {
    pub container: NodeId,
    pub gradient: NodeId,
    pub plot: Option<PlotHandles>,
}

/// Path data through every point in dataset order: `M x,y L x,y ...`.
pub fn line_path(geometry: &Geometry, series: &Series) -> String {
    let mut d = String::with_capacity(series.len() * 16);
    for (i, p) in series.points().iter().enumerate() {
        let (x, y) = geometry.project(p);
        let _ = write!(d, "{}{x},{y}", if i == 0 { 'M' } else { 'L' });
    }
    d
}

/// Draw one complete scene into an empty surface and install a fresh hidden tooltip.
///
/// Without geometry (no plottable points) only the container and the gradient are drawn.
pub fn draw_scene(
    surface: &mut Surface,
    tooltip: &mut TooltipLayer,
    dims: Dimensions,
    geometry: Option<&Geometry>,
    series: &Series,
    theme: &Theme,
    cfg: &ChartConfig,
    gradient_id: &Uid,
) -> SceneHandles {
    let root = surface.root();

    let container = surface.append(root, "g");
    surface
        .add_class(container, CONTAINER_CLASS)
        .set_attr(container, "transform", format!("translate({}, {})", dims.margins.left, dims.margins.top));

    tooltip.replace(new_tooltip(theme, cfg));

    let gradient = surface.append(root, "linearGradient");
    surface
        .set_attr(gradient, "id", &gradient_id.id)
        .set_attr(gradient, "gradientUnits", "userSpaceOnUse")
        .set_attr(gradient, "x1", 0)
        .set_attr(gradient, "y1", dims.container_height)
        .set_attr(gradient, "x2", 0)
        .set_attr(gradient, "y2", 0);
    let stops = match geometry {
        Some(g) => g.stops.clone(),
        None => gradient_stops(cfg.gradient_ticks),
    };
    for stop in &stops {
        let s = surface.append(gradient, "stop");
        surface.set_attr(s, "offset", stop.offset).set_attr(s, "stop-color", stop.color);
    }

    let plot = geometry
        .filter(|_| !series.is_empty())
        .map(|g| draw_plot(surface, container, g, series, theme, cfg, gradient_id));
    SceneHandles { container, gradient, plot }
}

fn draw_plot(
    surface: &mut Surface,
    container: NodeId,
    geometry: &Geometry,
    series: &Series,
    theme: &Theme,
    cfg: &ChartConfig,
    gradient_id: &Uid,
) -> PlotHandles {
    let dims = geometry.dims;

    let line = surface.append(container, "path");
    surface
        .set_attr(line, "d", line_path(geometry, series))
        .set_attr(line, "fill", "none")
        .set_attr(line, "stroke", gradient_id)
        .set_attr(line, "stroke-width", cfg.line_stroke_width);

    let y_axis = Axis::left(&geometry.y, cfg.y_ticks, &cfg.y_tick_suffix).draw(surface, container);
    surface.add_class(y_axis.group, "yAxis").set_style(y_axis.group, "color", &theme.divider);
    for &label in &y_axis.labels {
        surface.set_style(label, "color", &theme.text_secondary);
    }

    let x_axis = Axis::bottom(&geometry.x, cfg.x_ticks).draw(surface, container);
    surface
        .add_class(x_axis.group, "xAxis")
        .set_style(x_axis.group, "color", &theme.divider)
        .set_style(x_axis.group, "transform", format!("translateY({}px)", dims.container_height));
    for &label in &x_axis.labels {
        surface
            .set_attr(label, "transform", format!("rotate({})", cfg.x_label_rotation))
            .set_style(label, "text-anchor", "start")
            .set_style(label, "color", &theme.text_secondary);
    }

    let dot = surface.append(container, "circle");
    surface
        .add_class(dot, DOT_CLASS)
        .set_attr(dot, "r", cfg.dot_radius)
        .set_attr(dot, "fill", "transparent")
        .set_attr(dot, "stroke", &theme.divider)
        .set_attr(dot, "stroke-width", cfg.dot_stroke_width)
        .set_style(dot, "opacity", 0)
        .set_style(dot, "cursor", "pointer");

    let vertical = crosshair(surface, container, theme);
    surface.set_attr(vertical, "y1", dims.container_height).set_attr(vertical, "y2", 0);
    let horizontal = crosshair(surface, container, theme);
    surface.set_attr(horizontal, "x1", 0).set_attr(horizontal, "x2", dims.container_width);

    let tracker = surface.append(container, "rect");
    surface
        .add_class(tracker, TRACKER_CLASS)
        .set_attr(tracker, "width", dims.container_width)
        .set_attr(tracker, "height", dims.container_height)
        .set_style(tracker, "opacity", 0);

    PlotHandles { line, y_axis, x_axis, dot, vertical, horizontal, tracker }
}

fn crosshair(surface: &mut Surface, container: NodeId, theme: &Theme) -> NodeId {
    let line = surface.append(container, "line");
    surface
        .add_class(line, CROSSHAIR_CLASS)
        .set_style(line, "stroke", &theme.divider)
        .set_style(line, "stroke-width", "1px")
        .set_style(line, "opacity", 0);
    line
}
