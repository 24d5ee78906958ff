// File: crates/playground-chart/src/host.rs
// Summary: Widget adapter driving ChartHooks through attach/update/detach and pointer dispatch.

use futures::task::{LocalSpawn, LocalSpawnExt};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::lifecycle::{ChartHooks, ChartProps};
use crate::scene::{Surface, TooltipLayer};
use crate::tracker::PointerInput;

/// The root `<svg>` class set on every update.
pub const SVG_CLASS: &str = "line-chart-svg";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetPhase {
    #[default]
    Detached,
    Attached,
}

/// Owns the drawing surface and tooltip layer of one widget instance and calls
/// its hooks in lifecycle order. Click triggers run on the supplied spawner.
pub struct WidgetAdapter<H: ChartHooks> {
    hooks: H,
    surface: Surface,
    tooltip: TooltipLayer,
    spawner: Box<dyn LocalSpawn>,
    props: Option<ChartProps>,
    phase: WidgetPhase,
}

impl<H: ChartHooks> WidgetAdapter<H> {
    pub fn new(hooks: H, spawner: impl LocalSpawn + 'static) -> Self {
        Self {
            hooks,
            surface: Surface::new(),
            tooltip: TooltipLayer::default(),
            spawner: Box::new(spawner),
            props: None,
            phase: WidgetPhase::Detached,
        }
    }

    /// Mount (first attach only) and render. Attaching twice behaves like `update`.
    pub fn attach(&mut self, props: ChartProps) {
        if self.phase == WidgetPhase::Detached {
            self.hooks.mount(&props);
            self.phase = WidgetPhase::Attached;
        }
        self.update(props);
    }

    /// Tear down the previous scene and render `props`. Ignored while detached.
    pub fn update(&mut self, props: ChartProps) {
        if self.phase == WidgetPhase::Detached {
            debug!("update while detached; ignored");
            return;
        }
        let root = self.surface.root();
        self.surface
            .set_attr(root, "class", SVG_CLASS)
            .set_attr(root, "width", props.width)
            .set_attr(root, "height", props.height);
        self.surface.clear();
        self.tooltip.remove();

        if !props.dataset.is_empty() && props.width > 0.0 && props.height > 0.0 {
            self.hooks.render(&props, &mut self.surface, &mut self.tooltip);
        } else {
            debug!(records = props.dataset.len(), width = props.width, height = props.height, "nothing to render");
        }
        self.props = Some(props);
    }

    /// Re-render only when a watched prop changed: dataset identity, size, theme, ids or config.
    /// Unwatched props (host layout, click trigger) are always taken over for later dispatch.
    pub fn update_if_changed(&mut self, props: ChartProps) -> bool {
        let unchanged = self.phase == WidgetPhase::Attached
            && self.props.as_ref().is_some_and(|old| {
                old.dataset.ptr_eq(&props.dataset)
                    && old.width == props.width
                    && old.height == props.height
                    && old.theme == props.theme
                    && old.ids == props.ids
                    && old.config == props.config
            });
        if unchanged {
            self.props = Some(props);
            return false;
        }
        self.update(props);
        true
    }

    /// Unmount and clear the scene. A later `attach` mounts again.
    pub fn detach(&mut self) {
        if self.phase == WidgetPhase::Detached {
            return;
        }
        if let Some(props) = self.props.take() {
            self.hooks.unmount(&props);
        }
        self.surface.clear();
        self.tooltip.remove();
        self.phase = WidgetPhase::Detached;
    }

    /// Deliver pointer input. Returns `Ok(true)` when a click trigger was spawned.
    pub fn dispatch(&mut self, input: PointerInput) -> Result<bool> {
        if self.phase == WidgetPhase::Detached {
            return Ok(false);
        }
        let Some(props) = self.props.as_ref() else {
            return Ok(false);
        };
        let Some(pending) = self.hooks.handle_input(props, input, &mut self.surface, &mut self.tooltip) else {
            return Ok(false);
        };
        let future = pending.into_future();
        self.spawner
            .spawn_local(async move {
                let handled = future.await;
                debug!(handled, "click trigger settled");
            })
            .map_err(|e| ChartError::Dispatch(e.to_string()))?;
        Ok(true)
    }

    pub fn phase(&self) -> WidgetPhase {
        self.phase
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn tooltip(&self) -> &TooltipLayer {
        &self.tooltip
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn props(&self) -> Option<&ChartProps> {
        self.props.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::PlaygroundChart;
    use crate::record::{Dataset, Record};
    use futures::executor::LocalPool;

    #[derive(Default)]
    struct Counting {
        mounts: usize,
        renders: usize,
        unmounts: usize,
    }

    impl ChartHooks for Counting {
        fn mount(&mut self, _props: &ChartProps) {
            self.mounts += 1;
        }
        fn render(&mut self, _props: &ChartProps, surface: &mut Surface, _tooltip: &mut TooltipLayer) {
            assert!(surface.is_empty(), "previous scene must be gone");
            self.renders += 1;
            let root = surface.root();
            surface.append(root, "g");
        }
        fn unmount(&mut self, _props: &ChartProps) {
            self.unmounts += 1;
        }
    }

    fn props(w: f64, h: f64) -> ChartProps {
        let ds: Dataset = vec![Record::new().with("date", "2024-01-01").with("temperature", 1)].into();
        ChartProps::new(ds, w, h)
    }

    #[test]
    fn lifecycle_calls_are_ordered_and_guarded() {
        let pool = LocalPool::new();
        let mut w = WidgetAdapter::new(Counting::default(), pool.spawner());
        w.attach(props(400.0, 300.0));
        w.attach(props(400.0, 300.0));
        w.update(props(500.0, 300.0));
        assert_eq!(w.hooks().mounts, 1);
        assert_eq!(w.hooks().renders, 3);
        assert_eq!(w.surface().attr(w.surface().root(), "width"), Some("500"));
        assert_eq!(w.surface().attr(w.surface().root(), "class"), Some(SVG_CLASS));

        w.detach();
        w.detach();
        assert_eq!(w.hooks().unmounts, 1);
        assert!(w.surface().is_empty());
        assert_eq!(w.phase(), WidgetPhase::Detached);

        w.update(props(400.0, 300.0));
        assert_eq!(w.hooks().renders, 3);
    }

    #[test]
    fn only_watched_prop_changes_re_render() {
        let pool = LocalPool::new();
        let mut w = WidgetAdapter::new(Counting::default(), pool.spawner());
        let first = props(400.0, 300.0);
        w.attach(first.clone());
        assert!(!w.update_if_changed(first.clone()));

        // Equal contents in a new allocation count as a new dataset.
        let copy = ChartProps { dataset: first.dataset.to_vec().into(), ..first.clone() };
        assert!(w.update_if_changed(copy.clone()));
        assert!(w.update_if_changed(ChartProps { height: 200.0, ..copy }));
        assert_eq!(w.hooks().renders, 3);
    }

    #[test]
    fn unchanged_update_still_takes_the_new_layout() {
        let pool = LocalPool::new();
        let mut w = WidgetAdapter::new(Counting::default(), pool.spawner());
        let first = props(400.0, 300.0);
        w.attach(first.clone());

        let mut layout = first.layout;
        layout.viewport.width = 360.0;
        assert!(!w.update_if_changed(first.clone().with_layout(layout)));
        assert_eq!(w.hooks().renders, 1);
        assert_eq!(w.props().map(|p| p.layout.viewport.width), Some(360.0));
    }

    #[test]
    fn config_change_re_renders() {
        let pool = LocalPool::new();
        let mut w = WidgetAdapter::new(Counting::default(), pool.spawner());
        let first = props(400.0, 300.0);
        w.attach(first.clone());

        let mut cfg = first.config.clone();
        cfg.dot_radius += 2.0;
        assert!(w.update_if_changed(first.with_config(cfg)));
        assert_eq!(w.hooks().renders, 2);
    }

    #[test]
    fn zero_size_skips_render() {
        let pool = LocalPool::new();
        let mut w = WidgetAdapter::new(Counting::default(), pool.spawner());
        w.attach(props(0.0, 300.0));
        assert_eq!(w.hooks().renders, 0);
        assert!(w.surface().is_empty());
    }

    #[test]
    fn dispatch_while_detached_is_a_no_op() {
        let pool = LocalPool::new();
        let mut w = WidgetAdapter::new(PlaygroundChart::new(), pool.spawner());
        assert!(!w.dispatch(PointerInput::Move { x: 100.0, y: 100.0 }).unwrap());
    }
}
