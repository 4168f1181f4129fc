use std::rc::Rc;

use crate::domain::errors::{PlotError, PlotResult};
use crate::domain::events::{EventDispatcher, InMemoryEventDispatcher, Overlay, PlotEvent};
use crate::domain::logging::LogComponent;
use crate::domain::plot::{HeadHover, PlotConfig, PlotData, PlotLayout, PlotScalingEngine, PlotUpdate};
use crate::{log_info, log_warn};

pub type ZoomCallback = Box<dyn Fn(f64)>;
pub type PositionCallback = Box<dyn Fn(f64)>;
pub type ZoomAndMoveCallback = Box<dyn Fn(f64, f64)>;
pub type ReadyCallback = Box<dyn Fn()>;

/// Hooks for keeping other page controls in sync with the plot.
#[derive(Default)]
pub struct PlotCallbacks {
    pub on_zoom_change: Option<ZoomCallback>,
    /// Receives the sequence coordinate at the left edge.
    pub on_position_change: Option<PositionCallback>,
    pub on_zoom_and_move: Option<ZoomAndMoveCallback>,
    pub on_ready: Option<ReadyCallback>,
}

/// One needle plot instance: owns its transform, axes and data, and turns
/// API calls and gestures into committed updates, callbacks and overlay
/// notifications.
pub struct NeedlePlot {
    engine: Option<PlotScalingEngine>,
    callbacks: PlotCallbacks,
    dispatcher: InMemoryEventDispatcher,
}

impl Default for NeedlePlot {
    fn default() -> Self {
        Self::new()
    }
}

impl NeedlePlot {
    pub fn new() -> Self {
        Self {
            engine: None,
            callbacks: PlotCallbacks::default(),
            dispatcher: InMemoryEventDispatcher::new(),
        }
    }

    pub fn with_callbacks(mut self, callbacks: PlotCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: PlotCallbacks) {
        self.callbacks = callbacks;
    }

    /// Overlays are re-anchored after every transform change.
    pub fn add_overlay(&mut self, overlay: Rc<dyn Overlay>) {
        self.dispatcher.subscribe(move |event| {
            if let PlotEvent::TransformChanged { .. } = event {
                overlay.move_to_element();
            }
        });
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&PlotEvent) + 'static,
    {
        self.dispatcher.subscribe(handler);
    }

    /// One-time setup with resolved data.
    pub fn init(&mut self, config: PlotConfig, data: PlotData) {
        let engine = PlotScalingEngine::new(config, data);
        log_info!(
            LogComponent::Application("NeedlePlot"),
            "ready: {} needles, {} sites, {} x {}",
            engine.markers().len(),
            engine.sites().len(),
            engine.size().width,
            engine.size().height
        );
        self.dispatcher.publish(PlotEvent::DataLoaded {
            markers: engine.markers().len(),
            sites: engine.sites().len(),
        });
        self.engine = Some(engine);
        if let Some(on_ready) = &self.callbacks.on_ready {
            on_ready();
        }
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&PlotScalingEngine> {
        self.engine.as_ref()
    }

    pub fn zoom(&self) -> Option<f64> {
        self.engine.as_ref().map(PlotScalingEngine::scale)
    }

    /// Raw content offset in pixels.
    pub fn position(&self) -> Option<f64> {
        self.engine.as_ref().map(PlotScalingEngine::position)
    }

    pub fn data_position(&self) -> Option<f64> {
        self.engine.as_ref().map(PlotScalingEngine::data_position)
    }

    fn engine_mut(&mut self, operation: &str) -> PlotResult<&mut PlotScalingEngine> {
        self.engine.as_mut().ok_or_else(|| {
            log_warn!(LogComponent::Application("NeedlePlot"), "{} before init", operation);
            PlotError::NotReady
        })
    }

    fn animation_ms(&self, animate: bool) -> f64 {
        match (&self.engine, animate) {
            (Some(engine), true) => engine.config().animation_duration,
            _ => 0.0,
        }
    }

    /// Overlays always follow; callbacks only for non-silent changes.
    fn notify(&self, update: Option<PlotUpdate>, silent: bool) -> Option<PlotUpdate> {
        let update = update?;
        self.dispatcher.publish(PlotEvent::TransformChanged {
            scale: update.scale(),
            position: update.position(),
        });
        if silent {
            return Some(update);
        }
        if update.zoom_changed() {
            if let Some(callback) = &self.callbacks.on_zoom_change {
                callback(update.scale());
            }
        }
        if update.position_changed() {
            if let Some(callback) = &self.callbacks.on_position_change {
                callback(update.data_position);
            }
        }
        if update.zoom_changed() || update.position_changed() {
            if let Some(callback) = &self.callbacks.on_zoom_and_move {
                callback(update.scale(), update.data_position);
            }
        }
        Some(update)
    }

    pub fn set_zoom(&mut self, scale: f64, now_ms: f64) -> Option<PlotUpdate> {
        let duration = self.animation_ms(true);
        let update = self.engine_mut("setZoom").ok()?.set_zoom(scale, duration, now_ms);
        self.notify(update, false)
    }

    pub fn set_position(&mut self, offset: f64, now_ms: f64) -> Option<PlotUpdate> {
        let update = self.engine_mut("setPosition").ok()?.set_position(offset, now_ms);
        self.notify(update, false)
    }

    /// Scroll to sequence coordinate `position`.
    pub fn set_aa_position(&mut self, position: f64, silent: bool, animate: bool, now_ms: f64) -> Option<PlotUpdate> {
        let duration = self.animation_ms(animate);
        let update = self
            .engine_mut("setAAPosition")
            .ok()?
            .set_data_position(position, duration, now_ms);
        self.notify(update, silent)
    }

    /// Raw `(scale, translateX)` event, as a zoom behavior would emit it.
    pub fn set_zoom_and_move(&mut self, scale: f64, offset: f64, now_ms: f64) -> Option<PlotUpdate> {
        let update = self
            .engine_mut("zoomAndMove")
            .ok()?
            .set_zoom_and_move(scale, offset, 0.0, now_ms);
        self.notify(update, false)
    }

    pub fn wheel(&mut self, anchor_x: f64, factor: f64, now_ms: f64) -> Option<PlotUpdate> {
        let update = self.engine_mut("wheel").ok()?.wheel(anchor_x, factor, now_ms);
        self.notify(update, false)
    }

    pub fn drag(&mut self, dx: f64, now_ms: f64) -> Option<PlotUpdate> {
        let update = self.engine_mut("drag").ok()?.drag(dx, now_ms);
        self.notify(update, false)
    }

    pub fn set_size(&mut self, width: f64, height: f64, max_zoom: f64, now_ms: f64) -> Option<PlotUpdate> {
        let update = self
            .engine_mut("setSize")
            .ok()?
            .set_size(width, height, max_zoom, now_ms);
        self.notify(Some(update), false)
    }

    /// Swap data after init; limits are recomputed for the new length.
    pub fn reload(&mut self, data: PlotData, sequence_length: f64, now_ms: f64) -> Option<PlotUpdate> {
        let engine = self.engine_mut("reload").ok()?;
        let update = engine.reload(data, sequence_length, now_ms);
        let (markers, sites) = (engine.markers().len(), engine.sites().len());
        self.dispatcher.publish(PlotEvent::DataLoaded { markers, sites });
        self.notify(Some(update), false)
    }

    pub fn head_enter(&mut self, marker_id: usize) {
        let Some(engine) = self.engine.as_mut() else { return };
        if let Some(HeadHover::Expanded { key, members }) = engine.head_enter(marker_id) {
            self.dispatcher.publish(PlotEvent::HeadGroupExpanded { key: key.to_string(), members });
        }
    }

    pub fn head_leave(&mut self, marker_id: usize) {
        let Some(engine) = self.engine.as_mut() else { return };
        if let Some(HeadHover::Collapsed { key }) = engine.head_leave(marker_id) {
            self.dispatcher.publish(PlotEvent::HeadGroupCollapsed { key: key.to_string() });
        }
    }

    pub fn layout(&self, now_ms: f64) -> Option<PlotLayout> {
        self.engine.as_ref().map(|engine| engine.layout(now_ms))
    }

    /// Advance animations; `true` while more frames are needed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.engine.as_mut().is_some_and(|engine| engine.tick(now_ms))
    }

    /// Drop all plot state. Subsequent setters are ignored until `init`.
    pub fn destroy(&mut self) {
        if self.engine.take().is_some() {
            self.dispatcher.publish(PlotEvent::Destroyed);
            log_info!(LogComponent::Application("NeedlePlot"), "destroyed");
        }
        self.dispatcher.clear();
    }
}
