// File: crates/playground-chart/src/tracker.rs
// Summary: Pointer interaction state machine: input event -> selection -> redraw deltas.

use crate::chart::PlotHandles;
use crate::config::ChartConfig;
use crate::geometry::Geometry;
use crate::record::Series;
use crate::scene::{Surface, TooltipLayer};
use crate::text::TextMeasure;
use crate::theme::Theme;
use crate::tooltip::{place_tooltip, tooltip_text, tooltip_width, TooltipPlacement};
use crate::types::HostLayout;

/// Pointer input in surface-local pixels (origin at the top-left of the `<svg>`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Move { x: f64, y: f64 },
    /// The pointer left the chart's root container.
    LeaveRoot,
    Click { x: f64, y: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackState {
    #[default]
    Idle,
    Tracking,
}

/// What a tracker needs to see of the current render pass.
pub struct TrackContext<'a> {
    pub geometry: &'a Geometry,
    pub series: &'a Series,
    pub cfg: &'a ChartConfig,
    pub layout: &'a HostLayout,
    pub measure: &'a dyn TextMeasure,
}

/// Dot, crosshairs and tooltip for the selected point.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    /// Index into the series.
    pub point: usize,
    /// Container-local position of the point.
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub placement: TooltipPlacement,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Marker {
    Show(Highlight),
    Hide,
}

/// A click that landed on the dot while a point was selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickRequest {
    /// Index into the series.
    pub point: usize,
    /// Surface-local pointer position.
    pub x: f64,
    pub y: f64,
}

/// Scene changes produced by one input event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Redraw {
    pub marker: Option<Marker>,
    /// `Some(true)` when the pointer entered the dot, `Some(false)` when it left.
    pub dot_hover: Option<bool>,
    pub click: Option<ClickRequest>,
}

impl Redraw {
    pub fn is_empty(&self) -> bool {
        self.marker.is_none() && self.dot_hover.is_none() && self.click.is_none()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tracker {
    state: TrackState,
    selection: Option<usize>,
    over_dot: bool,
    /// Container-local center of the visible dot.
    dot_center: Option<(f64, f64)>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackState {
        self.state
    }

    /// Series index of the selected point. Survives `LeaveRoot`.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn is_over_dot(&self) -> bool {
        self.over_dot
    }

    pub fn handle(&mut self, input: PointerInput, ctx: &TrackContext<'_>) -> Redraw {
        match input {
            PointerInput::Move { x, y } => self.on_move(x, y, ctx),
            PointerInput::LeaveRoot => self.on_leave(),
            PointerInput::Click { x, y } => self.on_click(x, y, ctx),
        }
    }

    fn on_move(&mut self, x: f64, y: f64, ctx: &TrackContext<'_>) -> Redraw {
        let mut redraw = Redraw::default();
        let (lx, ly) = to_container(x, y, ctx);

        let over = self.hits_dot(lx, ly, ctx.cfg);
        if over != self.over_dot {
            self.over_dot = over;
            redraw.dot_hover = Some(over);
        }
        if over || !ctx.geometry.plot_rect().contains(lx, ly) {
            return redraw;
        }

        let at_ms = ctx.geometry.x.invert_ms(lx);
        let Some(point) = ctx.series.nearest_index(at_ms) else {
            return redraw;
        };
        let Some(p) = ctx.series.get(point) else {
            return redraw;
        };
        let (px, py) = ctx.geometry.project(p);
        let text = tooltip_text(p.value, p.at);
        let width = tooltip_width(&text, ctx.cfg, ctx.measure);
        let margins = ctx.geometry.dims.margins;
        let placement = place_tooltip(
            ctx.layout.surface_left + margins.left as f64,
            ctx.layout.surface_top + margins.top as f64,
            px,
            py,
            width,
            &ctx.layout.viewport,
            ctx.cfg,
        );
        tracing::trace!(point, record = p.index, x = px, y = py, "pointer resolved");

        self.state = TrackState::Tracking;
        self.selection = Some(point);
        self.dot_center = Some((px, py));
        redraw.marker = Some(Marker::Show(Highlight { point, x: px, y: py, text, placement }));
        redraw
    }

    fn on_leave(&mut self) -> Redraw {
        self.state = TrackState::Idle;
        self.dot_center = None;
        let dot_hover = std::mem::take(&mut self.over_dot).then_some(false);
        Redraw { marker: Some(Marker::Hide), dot_hover, click: None }
    }

    fn on_click(&self, x: f64, y: f64, ctx: &TrackContext<'_>) -> Redraw {
        let (lx, ly) = to_container(x, y, ctx);
        let click = match self.selection {
            Some(point) if self.hits_dot(lx, ly, ctx.cfg) => Some(ClickRequest { point, x, y }),
            _ => None,
        };
        Redraw { click, ..Redraw::default() }
    }

    fn hits_dot(&self, lx: f64, ly: f64, cfg: &ChartConfig) -> bool {
        let Some((cx, cy)) = self.dot_center else {
            return false;
        };
        let reach = cfg.dot_radius + cfg.dot_stroke_width / 2.0;
        (lx - cx).hypot(ly - cy) <= reach
    }
}

fn to_container(x: f64, y: f64, ctx: &TrackContext<'_>) -> (f64, f64) {
    let m = ctx.geometry.dims.margins;
    (x - m.left as f64, y - m.top as f64)
}

/// Write a redraw into the scene and the tooltip layer.
pub fn apply(redraw: &Redraw, handles: &PlotHandles, surface: &mut Surface, tooltip: &mut TooltipLayer, theme: &Theme) {
    if let Some(hover) = redraw.dot_hover {
        let stroke = if hover { &theme.primary } else { &theme.divider };
        surface.set_attr(handles.dot, "stroke", stroke);
    }
    match &redraw.marker {
        Some(Marker::Show(h)) => {
            surface
                .set_style(handles.dot, "opacity", 1)
                .set_attr(handles.dot, "cx", h.x)
                .set_attr(handles.dot, "cy", h.y);
            surface.raise(handles.dot);
            surface
                .set_attr(handles.vertical, "x1", h.x)
                .set_attr(handles.vertical, "x2", h.x)
                .set_style(handles.vertical, "opacity", 1);
            surface
                .set_attr(handles.horizontal, "y1", h.y)
                .set_attr(handles.horizontal, "y2", h.y)
                .set_style(handles.horizontal, "opacity", 1);
            if let Some(t) = tooltip.get_mut() {
                t.visible = true;
                t.text = h.text.clone();
                t.left = h.placement.left;
                t.top = h.placement.top;
                t.transform = h.placement.transform.clone();
            }
        }
        Some(Marker::Hide) => {
            for id in [handles.dot, handles.vertical, handles.horizontal] {
                surface.set_style(id, "opacity", 0);
            }
            if let Some(t) = tooltip.get_mut() {
                t.visible = false;
            }
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Dataset, Record};
    use crate::text::ApproxTextMeasure;
    use crate::types::{Dimensions, Insets};

    struct Fixture {
        geometry: Geometry,
        series: Series,
        cfg: ChartConfig,
        layout: HostLayout,
        measure: ApproxTextMeasure,
    }

    impl Fixture {
        // 400x300 with 50 px margins: days map to x = 0, 150, 300; 10/20/15 map to y = 200, 0, 100.
        fn new() -> Self {
            let ds: Dataset = vec![
                Record::new().with("date", "2024-01-01").with("temperature", 10),
                Record::new().with("date", "2024-01-02").with("temperature", 20),
                Record::new().with("date", "2024-01-03").with("temperature", 15),
            ]
            .into();
            let cfg = ChartConfig::default();
            let series = Series::ingest(&ds, &cfg).unwrap();
            let geometry = Geometry::build(&series, Dimensions::new(400.0, 300.0, Insets::default()), &cfg).unwrap();
            Self { geometry, series, cfg, layout: HostLayout::default(), measure: ApproxTextMeasure::default() }
        }

        fn ctx(&self) -> TrackContext<'_> {
            TrackContext {
                geometry: &self.geometry,
                series: &self.series,
                cfg: &self.cfg,
                layout: &self.layout,
                measure: &self.measure,
            }
        }
    }

    fn shown(r: &Redraw) -> &Highlight {
        match &r.marker {
            Some(Marker::Show(h)) => h,
            other => panic!("expected Show, got {other:?}"),
        }
    }

    #[test]
    fn move_selects_nearest_point() {
        let f = Fixture::new();
        let mut t = Tracker::new();
        let r = t.handle(PointerInput::Move { x: 50.0 + 140.0, y: 150.0 }, &f.ctx());
        let h = shown(&r);
        assert_eq!(h.point, 1);
        assert_eq!((h.x, h.y), (150.0, 0.0));
        assert_eq!(h.text, "20°F on January 2, 2024");
        assert_eq!(t.state(), TrackState::Tracking);
        assert_eq!(t.selection(), Some(1));
    }

    #[test]
    fn moves_in_the_margin_do_nothing() {
        let f = Fixture::new();
        let mut t = Tracker::new();
        let r = t.handle(PointerInput::Move { x: 10.0, y: 10.0 }, &f.ctx());
        assert!(r.is_empty());
        assert_eq!(t.state(), TrackState::Idle);
        assert_eq!(t.selection(), None);
    }

    #[test]
    fn hovering_the_dot_keeps_selection_and_enables_click() {
        let f = Fixture::new();
        let mut t = Tracker::new();
        t.handle(PointerInput::Move { x: 50.0 + 140.0, y: 150.0 }, &f.ctx());

        let r = t.handle(PointerInput::Move { x: 50.0 + 152.0, y: 50.0 + 3.0 }, &f.ctx());
        assert_eq!(r.dot_hover, Some(true));
        assert!(r.marker.is_none());
        assert_eq!(t.selection(), Some(1));

        let r = t.handle(PointerInput::Click { x: 202.0, y: 53.0 }, &f.ctx());
        assert_eq!(r.click, Some(ClickRequest { point: 1, x: 202.0, y: 53.0 }));

        let r = t.handle(PointerInput::Move { x: 60.0, y: 150.0 }, &f.ctx());
        assert_eq!(r.dot_hover, Some(false));
        assert_eq!(shown(&r).point, 0);
    }

    #[test]
    fn click_off_the_dot_is_ignored() {
        let f = Fixture::new();
        let mut t = Tracker::new();
        t.handle(PointerInput::Move { x: 190.0, y: 150.0 }, &f.ctx());
        let r = t.handle(PointerInput::Click { x: 100.0, y: 200.0 }, &f.ctx());
        assert!(r.click.is_none());
    }

    #[test]
    fn click_without_selection_is_ignored() {
        let f = Fixture::new();
        let mut t = Tracker::new();
        let r = t.handle(PointerInput::Click { x: 200.0, y: 50.0 }, &f.ctx());
        assert!(r.is_empty());
    }

    #[test]
    fn leave_hides_but_retains_selection() {
        let f = Fixture::new();
        let mut t = Tracker::new();
        t.handle(PointerInput::Move { x: 340.0, y: 150.0 }, &f.ctx());
        t.handle(PointerInput::Move { x: 350.0, y: 150.0 }, &f.ctx());
        let r = t.handle(PointerInput::LeaveRoot, &f.ctx());
        assert_eq!(r.marker, Some(Marker::Hide));
        assert_eq!(r.dot_hover, Some(false));
        assert_eq!(t.state(), TrackState::Idle);
        assert_eq!(t.selection(), Some(2));

        // The hidden dot is no longer a click target.
        let r = t.handle(PointerInput::Click { x: 350.0, y: 150.0 }, &f.ctx());
        assert!(r.click.is_none());
    }

    #[test]
    fn leave_from_idle_still_hides() {
        let f = Fixture::new();
        let mut t = Tracker::new();
        let r = t.handle(PointerInput::LeaveRoot, &f.ctx());
        assert_eq!(r.marker, Some(Marker::Hide));
        assert_eq!(r.dot_hover, None);
    }
}
