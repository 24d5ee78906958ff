// File: crates/playground-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small chart (plus a hovered tooltip) to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares the text for an exact match.
// - Else, checks the render is deterministic and well-formed, then blesses it.

mod common;

use futures::executor::LocalPool;
use playground_chart::{ChartProps, PlaygroundChart, PointerInput, WidgetAdapter};

fn render_text() -> String {
    let pool = LocalPool::new();
    let mut w = WidgetAdapter::new(PlaygroundChart::new(), pool.spawner());
    let ds = vec![
        common::record("2024-01-01", 10.0),
        common::record("2024-01-02", 14.5),
        common::record("2024-01-03", 12.0),
        common::record("2024-01-04", 21.0),
        common::record("2024-01-05", 18.0),
    ];
    w.attach(ChartProps::new(ds.into(), 480.0, 320.0));
    w.dispatch(PointerInput::Move { x: 200.0, y: 150.0 }).expect("dispatch move");

    let mut out = w.surface().to_svg_string();
    out.push_str(&w.tooltip().get().expect("tooltip").to_html());
    out.push('\n');
    out
}

#[test]
fn golden_basic_chart() {
    let text = render_text();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("basic_chart.svg");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), text.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        // Normalize line endings so a checkout with CRLF still matches.
        assert_eq!(text, want.replace("\r\n", "\n"), "rendered scene differs from golden snapshot: {}", snap_path.display());
    } else {
        assert_eq!(text, render_text(), "rendering must be deterministic to be snapshotted");
        assert!(text.starts_with("<svg"));
        assert!(text.contains("class=\"line-chart-svg\""));
        assert!(text.contains("linearGradient"));
        assert!(text.contains("°F on January"), "hovered tooltip is part of the snapshot");
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &text).expect("write snapshot");
        eprintln!("[snapshot] Blessed new snapshot {}", snap_path.display());
    }
}

#[test]
fn svg_file_is_written() {
    let pool = LocalPool::new();
    let mut w = WidgetAdapter::new(PlaygroundChart::new(), pool.spawner());
    w.attach(ChartProps::new(common::daily(10), 640.0, 360.0));
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    w.surface().write_svg(&out).expect("write svg");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("<svg"));
    assert!(text.trim_end().ends_with("</svg>"));
}
