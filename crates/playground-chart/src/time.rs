// File: crates/playground-chart/src/time.rs
// Summary: UTC calendar intervals for time-axis ticks, plus tick and tooltip date formatting.

use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Timelike, Utc};

use crate::grid::tick_step;

pub const SECOND_MS: f64 = 1_000.0;
pub const MINUTE_MS: f64 = SECOND_MS * 60.0;
pub const HOUR_MS: f64 = MINUTE_MS * 60.0;
pub const DAY_MS: f64 = HOUR_MS * 24.0;
pub const WEEK_MS: f64 = DAY_MS * 7.0;
pub const MONTH_MS: f64 = DAY_MS * 30.0;
pub const YEAR_MS: f64 = DAY_MS * 365.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    /// Weeks start on Sunday.
    Week,
    Month,
    Year,
}

/// A calendar unit plus a stride: `Hour x 6` ticks at 00:00, 06:00, 12:00, 18:00.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub unit: Unit,
    pub step: i64,
}

const TICK_INTERVALS: [(Unit, i64, f64); 18] = [
    (Unit::Second, 1, SECOND_MS),
    (Unit::Second, 5, 5.0 * SECOND_MS),
    (Unit::Second, 15, 15.0 * SECOND_MS),
    (Unit::Second, 30, 30.0 * SECOND_MS),
    (Unit::Minute, 1, MINUTE_MS),
    (Unit::Minute, 5, 5.0 * MINUTE_MS),
    (Unit::Minute, 15, 15.0 * MINUTE_MS),
    (Unit::Minute, 30, 30.0 * MINUTE_MS),
    (Unit::Hour, 1, HOUR_MS),
    (Unit::Hour, 3, 3.0 * HOUR_MS),
    (Unit::Hour, 6, 6.0 * HOUR_MS),
    (Unit::Hour, 12, 12.0 * HOUR_MS),
    (Unit::Day, 1, DAY_MS),
    (Unit::Day, 2, 2.0 * DAY_MS),
    (Unit::Week, 1, WEEK_MS),
    (Unit::Month, 1, MONTH_MS),
    (Unit::Month, 3, 3.0 * MONTH_MS),
    (Unit::Year, 1, YEAR_MS),
];

/// Pick the interval whose duration is closest (by ratio) to `span / count`.
pub fn tick_interval(start_ms: f64, stop_ms: f64, count: usize) -> Interval {
    let target = (stop_ms - start_ms).abs() / count.max(1) as f64;
    let i = TICK_INTERVALS.partition_point(|&(_, _, d)| d <= target);
    if i == TICK_INTERVALS.len() {
        let step = tick_step(start_ms / YEAR_MS, stop_ms / YEAR_MS, count).abs().floor();
        return Interval { unit: Unit::Year, step: (step as i64).max(1) };
    }
    if i == 0 {
        let step = tick_step(start_ms, stop_ms, count).abs().floor();
        return Interval { unit: Unit::Millisecond, step: (step as i64).max(1) };
    }
    let (_, _, lower) = TICK_INTERVALS[i - 1];
    let (_, _, upper) = TICK_INTERVALS[i];
    let (unit, step, _) = if target / lower < upper / target { TICK_INTERVALS[i - 1] } else { TICK_INTERVALS[i] };
    Interval { unit, step }
}

pub fn from_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    Utc.timestamp_millis_opt(ms.round() as i64).single()
}

/// Start of the unit containing `t`.
pub fn floor(t: DateTime<Utc>, unit: Unit) -> DateTime<Utc> {
    let midnight = |t: DateTime<Utc>| t.date_naive().and_hms_opt(0, 0, 0).map(|n| n.and_utc()).unwrap_or(t);
    match unit {
        Unit::Millisecond => t,
        Unit::Second => t.with_nanosecond(0).unwrap_or(t),
        Unit::Minute => t.with_nanosecond(0).and_then(|t| t.with_second(0)).unwrap_or(t),
        Unit::Hour => t.with_nanosecond(0).and_then(|t| t.with_second(0)).and_then(|t| t.with_minute(0)).unwrap_or(t),
        Unit::Day => midnight(t),
        Unit::Week => {
            let back = t.weekday().num_days_from_sunday() as i64;
            midnight(t) - Duration::days(back)
        }
        Unit::Month => midnight(t).with_day(1).unwrap_or(t),
        Unit::Year => midnight(t).with_day(1).and_then(|t| t.with_month(1)).unwrap_or(t),
    }
}

/// `t` advanced by one unit. `t` is expected to be on a unit boundary.
pub fn offset(t: DateTime<Utc>, unit: Unit) -> Option<DateTime<Utc>> {
    match unit {
        Unit::Millisecond => t.checked_add_signed(Duration::milliseconds(1)),
        Unit::Second => t.checked_add_signed(Duration::seconds(1)),
        Unit::Minute => t.checked_add_signed(Duration::minutes(1)),
        Unit::Hour => t.checked_add_signed(Duration::hours(1)),
        Unit::Day => t.checked_add_signed(Duration::days(1)),
        Unit::Week => t.checked_add_signed(Duration::weeks(1)),
        Unit::Month => t.checked_add_months(Months::new(1)),
        Unit::Year => t.checked_add_months(Months::new(12)),
    }
}

fn ceil(t: DateTime<Utc>, unit: Unit) -> Option<DateTime<Utc>> {
    let f = floor(t, unit);
    if f == t { Some(f) } else { offset(f, unit) }
}

impl Interval {
    /// Whether a unit boundary also lands on this interval's stride.
    fn accepts(&self, t: DateTime<Utc>) -> bool {
        let s = self.step;
        if s <= 1 {
            return true;
        }
        match self.unit {
            Unit::Millisecond => t.timestamp_millis().rem_euclid(s) == 0,
            Unit::Second => t.second() as i64 % s == 0,
            Unit::Minute => t.minute() as i64 % s == 0,
            Unit::Hour => t.hour() as i64 % s == 0,
            Unit::Day => (t.day() as i64 - 1) % s == 0,
            Unit::Week => true,
            Unit::Month => t.month0() as i64 % s == 0,
            Unit::Year => (t.year() as i64).rem_euclid(s) == 0,
        }
    }

    /// Every accepted boundary in `[start, stop]`, both inclusive.
    pub fn range(&self, start: DateTime<Utc>, stop: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let mut out = Vec::new();
        if self.unit == Unit::Millisecond {
            let (a, b, s) = (start.timestamp_millis(), stop.timestamp_millis(), self.step.max(1));
            let mut k = a.div_euclid(s) + i64::from(a.rem_euclid(s) != 0);
            while k * s <= b {
                if let Some(t) = Utc.timestamp_millis_opt(k * s).single() {
                    out.push(t);
                }
                k += 1;
            }
            return out;
        }
        let mut cur = ceil(start, self.unit);
        while let Some(t) = cur {
            if t > stop {
                break;
            }
            if self.accepts(t) {
                out.push(t);
            }
            cur = offset(t, self.unit);
        }
        out
    }
}

/// Label for a time-axis tick: the coarsest unit that still distinguishes `t`.
pub fn multi_format(t: DateTime<Utc>) -> String {
    if floor(t, Unit::Second) < t {
        format!(".{:03}", t.timestamp_subsec_millis())
    } else if floor(t, Unit::Minute) < t {
        t.format(":%S").to_string()
    } else if floor(t, Unit::Hour) < t {
        t.format("%I:%M").to_string()
    } else if floor(t, Unit::Day) < t {
        t.format("%I %p").to_string()
    } else if floor(t, Unit::Month) < t {
        if floor(t, Unit::Week) < t {
            t.format("%a %d").to_string()
        } else {
            t.format("%b %d").to_string()
        }
    } else if floor(t, Unit::Year) < t {
        t.format("%B").to_string()
    } else {
        t.format("%Y").to_string()
    }
}

/// "January 15, 2024".
pub fn long_date(t: DateTime<Utc>) -> String {
    t.format("%B %-d, %Y").to_string()
}
