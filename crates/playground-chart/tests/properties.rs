// File: crates/playground-chart/tests/properties.rs
// Purpose: Property checks for nearest-point resolution and tooltip viewport clamping.

use chrono::{TimeZone, Utc};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use playground_chart::time::DAY_MS;
use playground_chart::tooltip::place_tooltip;
use playground_chart::{ChartConfig, DataPoint, Dimensions, Geometry, Insets, Series, Viewport};

const BASE_MS: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z

fn series_from_days(days: &[u16]) -> Series {
    let mut days = days.to_vec();
    days.sort_unstable();
    days.dedup();
    let points = days
        .iter()
        .enumerate()
        .map(|(index, &d)| DataPoint {
            index,
            at: Utc.timestamp_millis_opt(BASE_MS + d as i64 * DAY_MS as i64).unwrap(),
            value: (d % 17) as f64,
        })
        .collect();
    Series::from_points(points)
}

#[quickcheck]
fn resolved_point_is_nearest_to_the_inverted_date(days: Vec<u16>, x: u16) -> TestResult {
    if days.is_empty() {
        return TestResult::discard();
    }
    let series = series_from_days(&days);
    let cfg = ChartConfig::default();
    let geometry = Geometry::build(&series, Dimensions::new(800.0, 400.0, Insets::default()), &cfg).unwrap();
    let px = x as f64 % (geometry.dims.container_width + 1.0);

    let query = geometry.x.invert_ms(px);
    let Some(i) = series.nearest_index(query) else {
        return TestResult::failed();
    };
    let best = (series.points()[i].millis() - query).abs();
    let closest = series.points().iter().map(|p| (p.millis() - query).abs()).fold(f64::INFINITY, f64::min);
    TestResult::from_bool(i < series.len() && best <= closest + 1e-6)
}

#[quickcheck]
fn nearest_prefers_the_later_point_on_ties(gap: u8) -> TestResult {
    if gap == 0 {
        return TestResult::discard();
    }
    let series = series_from_days(&[0, 2 * gap as u16]);
    let mid = BASE_MS as f64 + gap as f64 * DAY_MS;
    TestResult::from_bool(series.nearest_index(mid) == Some(1))
}

#[quickcheck]
fn tooltip_left_edge_stays_inside_the_viewport(x: i16, width: u16, viewport_extra: u16, plot_left: i16) -> bool {
    let cfg = ChartConfig::default();
    let viewport = Viewport { width: 32.0 + viewport_extra as f64, height: 800.0 };
    let width = (width % 2000) as f64;
    let p = place_tooltip(plot_left as f64, 0.0, x as f64, 0.0, width, &viewport, &cfg);
    p.box_left >= 16.0 && p.box_left <= viewport.width - 16.0
}
