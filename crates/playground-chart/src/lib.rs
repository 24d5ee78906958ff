// File: crates/playground-chart/src/lib.rs
// Summary: Library entry point; exports the playground line chart widget, its scene model and helpers.

pub mod error;
pub mod types;
pub mod config;
pub mod record;
pub mod grid;
pub mod time;
pub mod scale;
pub mod color;
pub mod uid;
pub mod theme;
pub mod scene;
pub mod axis;
pub mod text;
pub mod tooltip;
pub mod geometry;
pub mod chart;
pub mod tracker;
pub mod lifecycle;
pub mod host;

pub use error::{ChartError, Result};
pub use types::{Dimensions, HostLayout, Insets, Viewport};
pub use config::{ChartConfig, InvalidRecordPolicy, TooltipAnchor};
pub use record::{DataPoint, Dataset, Record, Series};
pub use scale::{LinearScale, TimeScale};
pub use geometry::Geometry;
pub use scene::{NodeId, Surface, TooltipElement, TooltipLayer};
pub use theme::Theme;
pub use text::{ApproxTextMeasure, TextMeasure};
pub use uid::{Uid, UidAllocator};
pub use tracker::{PointerInput, TrackState, Tracker};
pub use lifecycle::{
    ChartHooks, ChartProps, ClickEvent, ClickFuture, ClickPayload, ClickTrigger, PendingClick, PlaygroundChart, WidgetIds,
};
pub use host::{WidgetAdapter, WidgetPhase};
