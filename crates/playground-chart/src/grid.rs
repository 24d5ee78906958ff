// File: crates/playground-chart/src/grid.rs
// Summary: Tick layout helpers: "nice" 1/2/5 x 10^k steps and evenly spaced tick values.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Round half toward +inf, so negative ticks land on the same integers as positive ones.
#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Integer tick bounds `(i1, i2)` and increment for `[start, stop]` (start <= stop).
///
/// A negative increment `-k` means steps of `1/k`, which keeps decimal ticks exact.
fn tick_range(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * k);
        i2 = round_half_up(stop * k);
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = round_half_up(start / k);
        i2 = round_half_up(stop / k);
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        inc = k;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` human-friendly values covering `[start, stop]`, in the direction of the input.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_range(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Raw increment for `[start, stop]`; negative values encode fractional steps (see [`tick_range`]).
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_range(start, stop, count as f64).2
}

/// Signed distance between adjacent ticks.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let inc = if reverse { tick_increment(stop, start, count) } else { tick_increment(start, stop, count) };
    let sign = if reverse { -1.0 } else { 1.0 };
    sign * if inc < 0.0 { 1.0 / -inc } else { inc }
}
