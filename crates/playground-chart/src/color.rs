// File: crates/playground-chart/src/color.rs
// Summary: Turbo sequential color map and the vertical gradient stops for the line stroke.

use std::fmt;

use crate::grid::ticks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn channel(v: f64) -> u8 {
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Polynomial approximation of Google's Turbo colormap; `t` is clamped to [0, 1].
pub fn interpolate_turbo(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    Rgb {
        r: channel(34.61 + t * (1172.33 - t * (10793.56 - t * (33300.12 - t * (38394.49 - t * 14825.05))))),
        g: channel(23.31 + t * (557.33 + t * (1225.33 - t * (3574.96 - t * (1073.77 + t * 707.56))))),
        b: channel(27.2 + t * (3211.1 - t * (15327.97 - t * (27814.0 - t * (22569.18 - t * 6838.66))))),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgb,
}

/// Stops at `ticks(0, 1, count)`; offset 0 is the bottom of the plot (domain min).
pub fn gradient_stops(count: usize) -> Vec<GradientStop> {
    ticks(0.0, 1.0, count)
        .into_iter()
        .map(|offset| GradientStop { offset, color: interpolate_turbo(offset) })
        .collect()
}
