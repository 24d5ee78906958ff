// File: crates/playground-chart/src/lifecycle.rs
// Summary: Widget props, the click-trigger seam, and the mount/render/unmount hooks of the playground chart.

use std::fmt;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use tracing::{debug, error};

use crate::chart::{draw_scene, PlotHandles};
use crate::config::ChartConfig;
use crate::geometry::Geometry;
use crate::record::{DataPoint, Dataset, Record, Series};
use crate::scene::{Surface, TooltipLayer};
use crate::text::{ApproxTextMeasure, TextMeasure};
use crate::theme::Theme;
use crate::tracker::{apply, PointerInput, TrackContext, TrackState, Tracker};
use crate::types::{Dimensions, HostLayout};
use crate::uid::{Uid, UidAllocator};

/// Opaque host identifiers, passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetIds {
    pub item_id: String,
    pub page_id: String,
    pub app_uid: String,
}

/// The pointer event behind a click, in surface-local and client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickEvent {
    pub x: f64,
    pub y: f64,
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClickPayload {
    pub record: Record,
}

pub type ClickFuture = LocalBoxFuture<'static, bool>;

/// Host-supplied asynchronous click handler.
pub trait ClickTrigger {
    fn trigger(&self, event: ClickEvent, payload: ClickPayload) -> ClickFuture;
}

impl<F> ClickTrigger for F
where
    F: Fn(ClickEvent, ClickPayload) -> ClickFuture,
{
    fn trigger(&self, event: ClickEvent, payload: ClickPayload) -> ClickFuture {
        self(event, payload)
    }
}

/// A click trigger invocation that still has to be driven to completion.
pub struct PendingClick {
    pub event: ClickEvent,
    pub record: Record,
    future: ClickFuture,
}

impl PendingClick {
    pub fn into_future(self) -> ClickFuture {
        self.future
    }
}

impl fmt::Debug for PendingClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingClick").field("event", &self.event).field("record", &self.record).finish_non_exhaustive()
    }
}

/// Everything the host hands the widget on each render.
#[derive(Clone)]
pub struct ChartProps {
    pub dataset: Dataset,
    pub width: f64,
    pub height: f64,
    pub theme: Theme,
    pub layout: HostLayout,
    pub ids: WidgetIds,
    pub uids: Rc<UidAllocator>,
    pub on_click_trigger: Option<Rc<dyn ClickTrigger>>,
    pub config: ChartConfig,
}

impl ChartProps {
    pub fn new(dataset: Dataset, width: f64, height: f64) -> Self {
        Self {
            dataset,
            width,
            height,
            theme: Theme::default(),
            layout: HostLayout::default(),
            ids: WidgetIds::default(),
            uids: Rc::new(UidAllocator::new()),
            on_click_trigger: None,
            config: ChartConfig::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_layout(mut self, layout: HostLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_ids(mut self, ids: WidgetIds) -> Self {
        self.ids = ids;
        self
    }

    /// Share the page-wide id allocator.
    pub fn with_uids(mut self, uids: Rc<UidAllocator>) -> Self {
        self.uids = uids;
        self
    }

    pub fn with_click_trigger(mut self, trigger: impl ClickTrigger + 'static) -> Self {
        self.on_click_trigger = Some(Rc::new(trigger));
        self
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }
}

impl fmt::Debug for ChartProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartProps")
            .field("records", &self.dataset.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("theme", &self.theme.name)
            .field("ids", &self.ids)
            .field("on_click_trigger", &self.on_click_trigger.is_some())
            .finish_non_exhaustive()
    }
}

/// The three lifecycle entry points plus pointer delivery. None of them fail:
/// problems are logged and leave the scene empty.
pub trait ChartHooks {
    fn mount(&mut self, props: &ChartProps);

    /// Build the scene for `props`. The surface is expected to be empty already.
    fn render(&mut self, props: &ChartProps, surface: &mut Surface, tooltip: &mut TooltipLayer);

    fn unmount(&mut self, props: &ChartProps);

    fn handle_input(
        &mut self,
        _props: &ChartProps,
        _input: PointerInput,
        _surface: &mut Surface,
        _tooltip: &mut TooltipLayer,
    ) -> Option<PendingClick> {
        None
    }
}

/// State owned by one render pass; dropped when the next pass starts.
struct RenderPass {
    geometry: Geometry,
    series: Series,
    handles: PlotHandles,
    tracker: Tracker,
}

/// The temperature line chart.
pub struct PlaygroundChart {
    gradient: Option<Uid>,
    pass: Option<RenderPass>,
    measure: Box<dyn TextMeasure>,
}

impl Default for PlaygroundChart {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaygroundChart {
    pub fn new() -> Self {
        Self::with_measure(Box::new(ApproxTextMeasure::default()))
    }

    pub fn with_measure(measure: Box<dyn TextMeasure>) -> Self {
        Self { gradient: None, pass: None, measure }
    }

    /// Gradient id allocated at mount.
    pub fn gradient(&self) -> Option<&Uid> {
        self.gradient.as_ref()
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.pass.as_ref().map(|p| &p.geometry)
    }

    pub fn handles(&self) -> Option<&PlotHandles> {
        self.pass.as_ref().map(|p| &p.handles)
    }

    pub fn state(&self) -> TrackState {
        self.pass.as_ref().map_or(TrackState::Idle, |p| p.tracker.state())
    }

    /// The selected point of the current pass, if any.
    pub fn selected(&self) -> Option<&DataPoint> {
        let pass = self.pass.as_ref()?;
        pass.series.get(pass.tracker.selection()?)
    }
}

impl ChartHooks for PlaygroundChart {
    fn mount(&mut self, props: &ChartProps) {
        let uid = self.gradient.get_or_insert_with(|| props.uids.next());
        debug!(gradient = %uid.id, item = %props.ids.item_id, "mount");
    }

    fn render(&mut self, props: &ChartProps, surface: &mut Surface, tooltip: &mut TooltipLayer) {
        self.pass = None;
        if !surface.is_empty() {
            surface.clear();
        }

        let dims = Dimensions::new(props.width, props.height, props.config.margins);
        if dims.is_empty() {
            debug!(width = props.width, height = props.height, "zero-sized surface; skipping draw");
            return;
        }

        let series = match Series::ingest(&props.dataset, &props.config) {
            Ok(series) => series,
            Err(e) => {
                error!("dataset rejected: {e}");
                tooltip.remove();
                return;
            }
        };

        let uid = self.gradient.get_or_insert_with(|| props.uids.next()).clone();
        let geometry = Geometry::build(&series, dims, &props.config);
        let handles = draw_scene(surface, tooltip, dims, geometry.as_ref(), &series, &props.theme, &props.config, &uid);
        debug!(records = props.dataset.len(), points = series.len(), gradient = %uid.id, "render");

        if let (Some(geometry), Some(handles)) = (geometry, handles.plot) {
            self.pass = Some(RenderPass { geometry, series, handles, tracker: Tracker::new() });
        }
    }

    fn unmount(&mut self, props: &ChartProps) {
        self.pass = None;
        debug!(item = %props.ids.item_id, "unmount");
    }

    fn handle_input(
        &mut self,
        props: &ChartProps,
        input: PointerInput,
        surface: &mut Surface,
        tooltip: &mut TooltipLayer,
    ) -> Option<PendingClick> {
        let Self { pass, measure, .. } = self;
        let pass = pass.as_mut()?;
        let ctx = TrackContext {
            geometry: &pass.geometry,
            series: &pass.series,
            cfg: &props.config,
            layout: &props.layout,
            measure: &**measure,
        };
        let redraw = pass.tracker.handle(input, &ctx);
        apply(&redraw, &pass.handles, surface, tooltip, &props.theme);

        let request = redraw.click?;
        let trigger = props.on_click_trigger.as_ref()?;
        let point = pass.series.get(request.point)?;
        let record = props.dataset.get(point.index)?.clone();
        let event = ClickEvent {
            x: request.x,
            y: request.y,
            client_x: props.layout.surface_left + request.x,
            client_y: props.layout.surface_top + request.y,
        };
        debug!(record = point.index, "click on selected point");
        let future = trigger.trigger(event, ClickPayload { record: record.clone() });
        Some(PendingClick { event, record, future })
    }
}
