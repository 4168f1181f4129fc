use gloo::timers::callback::Timeout;
use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Promise, Reflect};
use leptos::*;
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use crate::app::{Gesture, NeedlePlotView};
use crate::application::needle_plot::{PositionCallback, ReadyCallback, ZoomAndMoveCallback, ZoomCallback};
use crate::application::{DataLoader, NeedlePlot, PlotCallbacks, Rect, TooltipAnchor};
use crate::domain::events::Overlay;
use crate::domain::logging::LogComponent;
use crate::domain::plot::{PlotConfig, PlotDataSource, PlotLayout, PlotUpdate};
use crate::domain::transform::{Point, Size};
use crate::infrastructure::{BrowserTimeProvider, PlotDataClient};
use crate::{log_error, log_warn};

/// Roughly one display frame.
const FRAME_MS: u32 = 16;

/// `init` argument: plot configuration plus the data or its location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitOptions {
    #[serde(default)]
    pub data: PlotDataSource,
    #[serde(flatten)]
    pub config: PlotConfig,
}

/// Any JS object with a `moveToElement()` method.
struct JsOverlay(JsValue);

/// `moveToElement` runs after the plot has released its borrow, so an
/// overlay may read the plot back through the API.
impl Overlay for JsOverlay {
    fn move_to_element(&self) {
        let overlay = self.0.clone();
        spawn_local(async move {
            let method = Reflect::get(&overlay, &JsValue::from_str("moveToElement"))
                .ok()
                .and_then(|value| value.dyn_into::<Function>().ok());
            if let Some(method) = method {
                if let Err(err) = method.call0(&overlay) {
                    log_error!(LogComponent::Presentation("Overlay"), "moveToElement failed: {:?}", err);
                }
            }
        });
    }
}

/// Run a page callback after the current call has returned, so it may call
/// back into the plot.
fn defer_call(function: &Function, args: Vec<JsValue>) {
    let function = function.clone();
    spawn_local(async move {
        let args: Array = args.into_iter().collect();
        if let Err(err) = function.apply(&JsValue::NULL, &args) {
            log_error!(LogComponent::Presentation("Callbacks"), "callback threw: {:?}", err);
        }
    });
}

fn js_function(config: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(config, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn js_callbacks(config: &JsValue) -> PlotCallbacks {
    PlotCallbacks {
        on_zoom_change: js_function(config, "onZoomChange").map(|f| {
            Box::new(move |scale: f64| defer_call(&f, vec![scale.into()])) as ZoomCallback
        }),
        on_position_change: js_function(config, "onPositionChange").map(|f| {
            Box::new(move |position: f64| defer_call(&f, vec![position.into()])) as PositionCallback
        }),
        on_zoom_and_move: js_function(config, "onZoomAndMove").map(|f| {
            Box::new(move |scale: f64, position: f64| defer_call(&f, vec![scale.into(), position.into()]))
                as ZoomAndMoveCallback
        }),
        on_ready: js_function(config, "onReady")
            .map(|f| Box::new(move || defer_call(&f, Vec::new())) as ReadyCallback),
    }
}

/// Chained timeouts that keep publishing layouts while an animation runs.
/// Starting a new chain makes the previous one stop at its next frame.
#[derive(Clone, Default)]
struct FrameLoop {
    generation: Rc<Cell<u64>>,
}

impl FrameLoop {
    fn start(&self, plot: Rc<RefCell<NeedlePlot>>, layout: RwSignal<Option<PlotLayout>>) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        Self::frame(Rc::clone(&self.generation), generation, plot, layout);
    }

    fn stop(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    fn frame(
        current: Rc<Cell<u64>>,
        generation: u64,
        plot: Rc<RefCell<NeedlePlot>>,
        layout: RwSignal<Option<PlotLayout>>,
    ) {
        Timeout::new(FRAME_MS, move || {
            if current.get() != generation {
                return;
            }
            let now = BrowserTimeProvider::now_ms();
            let animating = plot.borrow_mut().tick(now);
            layout.set(plot.borrow().layout(now));
            if animating {
                Self::frame(current, generation, plot, layout);
            }
        })
        .forget();
    }
}

/// Publish the current frame and keep animating if needed.
fn refresh(plot: &Rc<RefCell<NeedlePlot>>, layout: RwSignal<Option<PlotLayout>>, frames: &FrameLoop) {
    let now = BrowserTimeProvider::now_ms();
    let animating = plot.borrow().engine().is_some_and(|engine| engine.is_animating());
    layout.set(plot.borrow().layout(now));
    if animating {
        frames.start(Rc::clone(plot), layout);
    }
}

/// Needle plot bound to a host element.
#[wasm_bindgen]
pub struct NeedlePlotApi {
    element_id: String,
    plot: Rc<RefCell<NeedlePlot>>,
    layout: RwSignal<Option<PlotLayout>>,
    loader: DataLoader,
    frames: FrameLoop,
    mounted: bool,
}

#[wasm_bindgen]
impl NeedlePlotApi {
    #[wasm_bindgen(constructor)]
    pub fn new(element_id: String) -> Self {
        Self {
            element_id,
            plot: Rc::new(RefCell::new(NeedlePlot::new())),
            layout: create_rw_signal(None),
            loader: DataLoader::new(PlotDataClient::new()),
            frames: FrameLoop::default(),
            mounted: false,
        }
    }

    /// Resolve the data (fetching it when `data` is a location), build the
    /// plot and draw it. Resolves to `true` once ready.
    pub fn init(&mut self, config: JsValue) -> Promise {
        let options: InitOptions = match config.into_serde() {
            Ok(options) => options,
            Err(err) => return Promise::reject(&JsValue::from_str(&format!("Invalid config: {}", err))),
        };
        if let Err(err) = self.mount() {
            return Promise::reject(&err);
        }
        self.plot.borrow_mut().set_callbacks(js_callbacks(&config));

        let request = self.loader.load(options.data);
        let plot = Rc::clone(&self.plot);
        let layout = self.layout;
        let frames = self.frames.clone();
        let plot_config = options.config;
        future_to_promise(async move {
            let data = request.await.map_err(|err| {
                log_warn!(LogComponent::Presentation("NeedlePlotApi"), "plot not drawn: {}", err);
                JsValue::from_str(&err.to_string())
            })?;
            plot.borrow_mut().init(plot_config, data);
            refresh(&plot, layout, &frames);
            Ok(JsValue::TRUE)
        })
    }

    /// Replace the data; `data` may be inline or a location.
    pub fn reload(&mut self, data: JsValue, sequence_length: f64) -> Promise {
        let source: PlotDataSource = match data.into_serde() {
            Ok(source) => source,
            Err(err) => return Promise::reject(&JsValue::from_str(&format!("Invalid data: {}", err))),
        };
        let request = self.loader.load(source);
        let plot = Rc::clone(&self.plot);
        let layout = self.layout;
        let frames = self.frames.clone();
        future_to_promise(async move {
            let data = request.await.map_err(|err| JsValue::from_str(&err.to_string()))?;
            let now = BrowserTimeProvider::now_ms();
            plot.borrow_mut().reload(data, sequence_length, now);
            refresh(&plot, layout, &frames);
            Ok(JsValue::TRUE)
        })
    }

    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, scale: f64) {
        let update = self.plot.borrow_mut().set_zoom(scale, BrowserTimeProvider::now_ms());
        self.after(update);
    }

    /// Raw pixel offset of the content.
    #[wasm_bindgen(js_name = setPosition)]
    pub fn set_position(&mut self, offset: f64) {
        let update = self.plot.borrow_mut().set_position(offset, BrowserTimeProvider::now_ms());
        self.after(update);
    }

    /// Sequence coordinate to show at the left edge.
    #[wasm_bindgen(js_name = setAAPosition)]
    pub fn set_aa_position(&mut self, position: f64, silent: Option<bool>, animate: Option<bool>) {
        let now = BrowserTimeProvider::now_ms();
        let update = self.plot.borrow_mut().set_aa_position(
            position,
            silent.unwrap_or(false),
            animate.unwrap_or(false),
            now,
        );
        self.after(update);
    }

    #[wasm_bindgen(js_name = setSize)]
    pub fn set_size(&mut self, width: f64, height: f64, max_zoom: f64) {
        let now = BrowserTimeProvider::now_ms();
        let update = self.plot.borrow_mut().set_size(width, height, max_zoom, now);
        self.after(update);
    }

    #[wasm_bindgen(js_name = addOverlay)]
    pub fn add_overlay(&mut self, overlay: JsValue) {
        self.plot.borrow_mut().add_overlay(Rc::new(JsOverlay(overlay)));
    }

    #[wasm_bindgen(js_name = getZoom)]
    pub fn get_zoom(&self) -> Option<f64> {
        self.plot.borrow().zoom()
    }

    /// Sequence coordinate at the left edge.
    #[wasm_bindgen(js_name = getPosition)]
    pub fn get_position(&self) -> Option<f64> {
        self.plot.borrow().data_position()
    }

    /// `[start, end]` of the visible part of the sequence.
    #[wasm_bindgen(js_name = getVisibleDomain)]
    pub fn get_visible_domain(&self) -> Option<Array> {
        let plot = self.plot.borrow();
        let (start, end) = plot.engine()?.visible_domain();
        Some([JsValue::from_f64(start), JsValue::from_f64(end)].into_iter().collect())
    }

    /// Remove the rendered plot from its element. Loads still in flight
    /// are discarded when they resolve.
    pub fn destroy(&mut self) {
        self.loader.cancel();
        self.frames.stop();
        self.plot.borrow_mut().destroy();
        self.layout.set(None);
        if let Some(element) = gloo::utils::document().get_element_by_id(&self.element_id) {
            element.set_inner_html("");
        }
        self.mounted = false;
    }
}

impl NeedlePlotApi {
    fn after(&self, update: Option<PlotUpdate>) {
        if update.is_some() {
            refresh(&self.plot, self.layout, &self.frames);
        }
    }

    fn gesture_callback(&self) -> Callback<Gesture> {
        let plot = Rc::clone(&self.plot);
        let layout = self.layout;
        let frames = self.frames.clone();
        Callback::new(move |gesture: Gesture| {
            let now = BrowserTimeProvider::now_ms();
            {
                let mut plot = plot.borrow_mut();
                match gesture {
                    Gesture::Wheel { anchor_x, factor } => {
                        plot.wheel(anchor_x, factor, now);
                    }
                    Gesture::Drag { dx } => {
                        plot.drag(dx, now);
                    }
                    Gesture::HeadEnter(id) => plot.head_enter(id),
                    Gesture::HeadLeave(id) => plot.head_leave(id),
                }
            }
            refresh(&plot, layout, &frames);
        })
    }

    fn mount(&mut self) -> Result<(), JsValue> {
        if self.mounted {
            return Ok(());
        }
        let element = gloo::utils::document()
            .get_element_by_id(&self.element_id)
            .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", self.element_id)))?
            .dyn_into::<web_sys::HtmlElement>()?;
        let layout = self.layout;
        let on_gesture = self.gesture_callback();
        mount_to(element, move || view! { <NeedlePlotView layout=layout on_gesture=on_gesture /> });
        self.mounted = true;
        Ok(())
    }
}

/// Keeps a page tooltip at the spot of its element where it was opened.
/// Meant to be called from an overlay's `moveToElement()`.
#[wasm_bindgen(js_name = TooltipAnchor)]
pub struct TooltipAnchorApi(TooltipAnchor);

#[wasm_bindgen(js_class = TooltipAnchor)]
impl TooltipAnchorApi {
    #[wasm_bindgen(constructor)]
    pub fn new(element: &web_sys::Element, pointer_x: f64, pointer_y: f64) -> Self {
        let rect = Rect::from(&element.get_bounding_client_rect());
        Self(TooltipAnchor::at_pointer(rect, Point::new(pointer_x, pointer_y)))
    }

    /// `[left, top]` for a tooltip of the given size, kept inside the window.
    pub fn place(&self, element: &web_sys::Element, width: f64, height: f64) -> Array {
        let rect = Rect::from(&element.get_bounding_client_rect());
        let placed = self.0.place(rect, Size::new(width, height), window_rect());
        [JsValue::from_f64(placed.x), JsValue::from_f64(placed.y)].into_iter().collect()
    }
}

fn window_rect() -> Rect {
    let window = gloo::utils::window();
    let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Rect::new(0.0, 0.0, dimension(window.inner_width()), dimension(window.inner_height()))
}
