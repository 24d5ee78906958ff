// File: crates/playground-chart/src/scale.rs
// Summary: Linear value (Y) and UTC time (X) scales: map, invert, nice and ticks.

use chrono::{DateTime, Utc};

use crate::grid::{tick_increment, ticks};
use crate::time::{from_millis, multi_format, tick_interval};

/// Interpolate `a..b` at `t`, exact at both ends.
#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Position of `x` within `a..b`; a collapsed span sits at the middle.
#[inline]
fn normalize(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 { 0.5 } else { (x - a) / span }
}

/// Continuous linear mapping from a value domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        lerp(self.range.0, self.range.1, normalize(self.domain.0, self.domain.1, v))
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        lerp(self.domain.0, self.domain.1, normalize(self.range.0, self.range.1, px))
    }

    /// Extend the domain outward to round tick boundaries.
    ///
    /// Leaves a collapsed or non-finite domain untouched.
    pub fn nice(mut self, count: usize) -> Self {
        let (mut i0, mut i1) = (0, 1);
        let mut d = [self.domain.0, self.domain.1];
        if d[1] < d[0] {
            std::mem::swap(&mut i0, &mut i1);
        }
        let (mut start, mut stop) = (d[i0], d[i1]);
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                d[i0] = start;
                d[i1] = stop;
                self.domain = (d[0], d[1]);
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// UTC time scale; the domain is held as milliseconds since the epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain_ms: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain: domain_ms, range }
    }

    #[inline]
    pub fn map_ms(&self, ms: f64) -> f64 {
        lerp(self.range.0, self.range.1, normalize(self.domain.0, self.domain.1, ms))
    }

    #[inline]
    pub fn map(&self, t: DateTime<Utc>) -> f64 {
        self.map_ms(t.timestamp_millis() as f64)
    }

    /// Approximate instant under pixel `px`, in epoch milliseconds.
    #[inline]
    pub fn invert_ms(&self, px: f64) -> f64 {
        lerp(self.domain.0, self.domain.1, normalize(self.range.0, self.range.1, px))
    }

    pub fn invert(&self, px: f64) -> Option<DateTime<Utc>> {
        from_millis(self.invert_ms(px))
    }

    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (a, b) = self.domain;
        let (lo, hi) = if b < a { (b, a) } else { (a, b) };
        let (Some(start), Some(stop)) = (from_millis(lo), from_millis(hi)) else {
            return Vec::new();
        };
        if start == stop {
            return vec![start];
        }
        let mut out = tick_interval(lo, hi, count).range(start, stop);
        if b < a {
            out.reverse();
        }
        out
    }

    pub fn tick_format(&self, t: DateTime<Utc>) -> String {
        multi_format(t)
    }
}
