// File: crates/playground-chart/src/axis.rs
// Summary: Axis model (ticks + labels) and its SVG group: domain path and one tick group per tick.

use crate::scale::{LinearScale, TimeScale};
use crate::scene::{NodeId, Surface};

/// Crisp 1px lines on a 1x display.
const OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Left,
    Bottom,
}

impl Orient {
    fn k(&self) -> f64 {
        match self {
            Orient::Left => -1.0,
            Orient::Bottom => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub ticks: Vec<AxisTick>,
    pub range: (f64, f64),
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

/// Nodes created by [`Axis::draw`].
#[derive(Clone, Debug)]
pub struct AxisNodes {
    pub group: NodeId,
    pub labels: Vec<NodeId>,
}

impl Axis {
    fn new(orient: Orient, ticks: Vec<AxisTick>, range: (f64, f64)) -> Self {
        Self { orient, ticks, range, tick_size_inner: 6.0, tick_size_outer: 6.0, tick_padding: 3.0 }
    }

    /// Value axis with `"<tick><suffix>"` labels.
    pub fn left(scale: &LinearScale, count: usize, suffix: &str) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| AxisTick { position: scale.map(v), label: format!("{v}{suffix}") })
            .collect();
        Self::new(Orient::Left, ticks, scale.range)
    }

    /// Time axis labelled with the multi-scale date format.
    pub fn bottom(scale: &TimeScale, count: usize) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|t| AxisTick { position: scale.map(t), label: scale.tick_format(t) })
            .collect();
        Self::new(Orient::Bottom, ticks, scale.range)
    }

    /// Outline of the axis line with outer tick caps.
    pub fn domain_path(&self) -> String {
        let outer = self.orient.k() * self.tick_size_outer;
        let (r0, r1) = (self.range.0 + OFFSET, self.range.1 + OFFSET);
        match self.orient {
            Orient::Left => format!("M{outer},{r0}H{OFFSET}V{r1}H{outer}"),
            Orient::Bottom => format!("M{r0},{outer}V{OFFSET}H{r1}V{outer}"),
        }
    }

    pub fn draw(&self, surface: &mut Surface, parent: NodeId) -> AxisNodes {
        let k = self.orient.k();
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let group = surface.append(parent, "g");
        surface
            .set_attr(group, "fill", "none")
            .set_attr(group, "font-size", 10)
            .set_attr(group, "font-family", "sans-serif")
            .set_attr(group, "text-anchor", if self.orient == Orient::Left { "end" } else { "middle" });

        let domain = surface.append(group, "path");
        surface
            .add_class(domain, "domain")
            .set_attr(domain, "stroke", "currentColor")
            .set_attr(domain, "d", self.domain_path());

        let mut labels = Vec::with_capacity(self.ticks.len());
        for tick in &self.ticks {
            let at = tick.position + OFFSET;
            let g = surface.append(group, "g");
            surface.add_class(g, "tick").set_attr(g, "opacity", 1);
            let line = surface.append(g, "line");
            surface.set_attr(line, "stroke", "currentColor");
            let text = surface.append(g, "text");
            surface.set_attr(text, "fill", "currentColor");
            match self.orient {
                Orient::Left => {
                    surface.set_attr(g, "transform", format!("translate(0,{at})"));
                    surface.set_attr(line, "x2", k * self.tick_size_inner);
                    surface.set_attr(text, "x", k * spacing).set_attr(text, "dy", "0.32em");
                }
                Orient::Bottom => {
                    surface.set_attr(g, "transform", format!("translate({at},0)"));
                    surface.set_attr(line, "y2", k * self.tick_size_inner);
                    surface.set_attr(text, "y", k * spacing).set_attr(text, "dy", "0.71em");
                }
            }
            surface.set_text(text, tick.label.clone());
            labels.push(text);
        }
        AxisNodes { group, labels }
    }
}
