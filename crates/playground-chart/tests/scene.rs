// File: crates/playground-chart/tests/scene.rs
// Purpose: Structure of a rendered scene: drawing order, line segments, axes, gradient and tooltip.

mod common;

use futures::executor::LocalPool;
use playground_chart::chart::{CONTAINER_CLASS, CROSSHAIR_CLASS, DOT_CLASS, TRACKER_CLASS};
use playground_chart::{ChartHooks, ChartProps, PlaygroundChart, Surface, TooltipLayer, WidgetAdapter};

fn rendered(props: ChartProps) -> (Surface, TooltipLayer, PlaygroundChart) {
    let mut chart = PlaygroundChart::new();
    let (mut surface, mut tooltip) = (Surface::new(), TooltipLayer::default());
    chart.mount(&props);
    chart.render(&props, &mut surface, &mut tooltip);
    (surface, tooltip, chart)
}

#[test]
fn one_line_with_n_minus_one_segments_and_one_axis_pair() {
    for n in [1usize, 2, 7, 40] {
        let (surface, _, _) = rendered(ChartProps::new(common::daily(n), 640.0, 360.0));
        let paths: Vec<_> = surface
            .find_by_tag("path")
            .into_iter()
            .filter(|id| surface.attr(*id, "fill") == Some("none"))
            .collect();
        assert_eq!(paths.len(), 1, "n={n}");
        let d = surface.attr(paths[0], "d").unwrap();
        assert!(d.starts_with('M'));
        assert_eq!(d.matches('L').count(), n - 1, "n={n}");
        assert_eq!(surface.find_by_class("yAxis").len(), 1);
        assert_eq!(surface.find_by_class("xAxis").len(), 1);
    }
}

#[test]
fn drawing_order_puts_the_interaction_rect_on_top() {
    let (surface, _, _) = rendered(ChartProps::new(common::daily(5), 640.0, 360.0));
    let root = surface.get(surface.root()).unwrap();
    let tags: Vec<_> = root.children().iter().map(|c| surface.get(*c).unwrap().tag().to_string()).collect();
    assert_eq!(tags, ["g", "linearGradient"]);

    let container = surface.find_by_class(CONTAINER_CLASS)[0];
    assert_eq!(surface.attr(container, "transform"), Some("translate(50, 50)"));
    let kids = surface.get(container).unwrap().children().to_vec();
    let describe = |id| {
        let e = surface.get(id).unwrap();
        let class = e.attr("class").unwrap_or("");
        format!("{}.{class}", e.tag())
    };
    let order: Vec<_> = kids.iter().map(|c| describe(*c)).collect();
    assert_eq!(
        order,
        [
            "path.".to_string(),
            "g.yAxis".to_string(),
            "g.xAxis".to_string(),
            format!("circle.{DOT_CLASS}"),
            format!("line.{CROSSHAIR_CLASS}"),
            format!("line.{CROSSHAIR_CLASS}"),
            format!("rect.{TRACKER_CLASS}"),
        ]
    );
}

#[test]
fn hover_primitives_start_hidden() {
    let (surface, tooltip, _) = rendered(ChartProps::new(common::daily(5), 640.0, 360.0));
    let dot = surface.find_by_class(DOT_CLASS)[0];
    assert_eq!(surface.attr(dot, "r"), Some("8"));
    assert_eq!(surface.attr(dot, "fill"), Some("transparent"));
    assert_eq!(surface.style(dot, "opacity"), Some("0"));
    assert_eq!(surface.style(dot, "cursor"), Some("pointer"));
    for line in surface.find_by_class(CROSSHAIR_CLASS) {
        assert_eq!(surface.style(line, "opacity"), Some("0"));
    }
    let rect = surface.find_by_class(TRACKER_CLASS)[0];
    assert_eq!(surface.attr(rect, "width"), Some("540"));
    assert_eq!(surface.attr(rect, "height"), Some("260"));
    assert_eq!(surface.style(rect, "opacity"), Some("0"));

    let t = tooltip.get().expect("tooltip installed");
    assert!(!t.visible);
    assert_eq!(t.style("background-color"), Some("#444"));
    assert_eq!(t.style("z-index"), Some("9999"));
    assert!(t.to_html().contains("display: none"));
}

#[test]
fn line_is_stroked_with_the_gradient() {
    let (surface, _, chart) = rendered(ChartProps::new(common::daily(5), 640.0, 360.0));
    let uid = chart.gradient().unwrap();
    let gradient = surface.find_by_tag("linearGradient")[0];
    assert_eq!(surface.attr(gradient, "id"), Some(uid.id.as_str()));
    assert_eq!(surface.attr(gradient, "gradientUnits"), Some("userSpaceOnUse"));
    assert_eq!(surface.attr(gradient, "y1"), Some("260"));
    assert_eq!(surface.attr(gradient, "y2"), Some("0"));
    assert_eq!(surface.get(gradient).unwrap().children().len(), 11);

    let line = chart.handles().unwrap().line;
    assert_eq!(surface.attr(line, "stroke"), Some(uid.to_string().as_str()));
    assert_eq!(surface.attr(line, "stroke-width"), Some("2"));
}

#[test]
fn bottom_labels_are_rotated_and_left_anchored() {
    let (surface, _, chart) = rendered(ChartProps::new(common::daily(30), 640.0, 360.0));
    let handles = chart.handles().unwrap();
    assert!(!handles.x_axis.labels.is_empty());
    for &label in &handles.x_axis.labels {
        assert_eq!(surface.attr(label, "transform"), Some("rotate(30)"));
        assert_eq!(surface.style(label, "text-anchor"), Some("start"));
    }
    for &label in &handles.y_axis.labels {
        assert!(surface.get(label).unwrap().text().unwrap().ends_with(" F"));
    }
}

#[test]
fn two_point_scenario() {
    let (surface, _, chart) = rendered(ChartProps::new(
        vec![common::record("2024-01-01", 10.0), common::record("2024-01-02", 20.0)].into(),
        400.0,
        300.0,
    ));
    let g = chart.geometry().unwrap();
    assert_eq!(g.y.domain, (10.0, 20.0));
    assert_eq!(g.x.domain, (1_704_067_200_000.0, 1_704_153_600_000.0));
    let d = surface.attr(chart.handles().unwrap().line, "d").unwrap();
    assert_eq!(d, "M0,200L300,0");
}

#[test]
fn all_malformed_records_draw_only_the_frame() {
    let (surface, tooltip, chart) = rendered(ChartProps::new(
        vec![common::record("yesterday", 1.0), common::record("not-a-date", 2.0)].into(),
        400.0,
        300.0,
    ));
    let root = surface.get(surface.root()).unwrap();
    assert_eq!(root.children().len(), 2);
    let container = surface.find_by_class(CONTAINER_CLASS)[0];
    assert!(surface.get(container).unwrap().children().is_empty());
    assert!(chart.handles().is_none());
    assert!(tooltip.get().is_some());
}

#[test]
fn adapter_sets_svg_size_and_class() {
    let pool = LocalPool::new();
    let mut w = WidgetAdapter::new(PlaygroundChart::new(), pool.spawner());
    w.attach(ChartProps::new(common::daily(3), 400.0, 300.0));
    let svg = w.surface().to_svg_string();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"line-chart-svg\" width=\"400\" height=\"300\">"));
}
