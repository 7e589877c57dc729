use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::eye::pupil_transform;
use folio_core::{pupil_offset, EyeGeometry, FrameGate, Point, PointerHistory, TrailLayout};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

use crate::input::{now_ms, viewport, PointerPoint};

const TRAIL_MARKER_CLASS: &str = "cursor-arrow";

pub(crate) struct EyeView {
    eye: Element,
    pupil: HtmlElement,
}

impl EyeView {
    /// Eye container plus its nested `.pupil`.
    pub(crate) fn find(document: &Document, selector: &str) -> Option<Self> {
        let eye = document.query_selector(selector).ok()??;
        let pupil = eye
            .query_selector(".pupil")
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Self { eye, pupil })
    }

    fn geometry(&self) -> EyeGeometry {
        let rect = self.eye.get_bounding_client_rect();
        EyeGeometry::from_bounds(
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
            self.pupil.offset_width() as f64,
        )
    }

    fn track(&self, pointer: Point) {
        let offset = pupil_offset(&self.geometry(), pointer);
        let _ = self
            .pupil
            .style()
            .set_property("transform", &pupil_transform(offset));
    }
}

/// Pointer history, eyes and trail markers, redrawn at most once per frame.
pub(crate) struct MotionView {
    eyes: Vec<EyeView>,
    markers: Vec<HtmlElement>,
    layout: TrailLayout,
    history: RefCell<PointerHistory>,
    pointer: Cell<Point>,
    gate: Cell<FrameGate>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl MotionView {
    pub(crate) fn new(
        document: &Document,
        eyes: Vec<EyeView>,
        trail_container: Option<&Element>,
        layout: TrailLayout,
    ) -> Rc<Self> {
        let markers = match trail_container {
            Some(container) => create_markers(document, container, layout.count),
            None => Vec::new(),
        };
        Rc::new(Self {
            eyes,
            markers,
            layout,
            history: RefCell::new(layout.history()),
            pointer: Cell::new(Point::ZERO),
            gate: Cell::new(FrameGate::new()),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub(crate) fn install(self: &Rc<Self>, window: &Window, document: &Document) {
        let mut listeners = Vec::new();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(document, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let point = PointerPoint::from_mouse(event);
            view.record_pointer(point.client_x, point.client_y, now_ms() as i64);
        }));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(window, "resize", move |_event: &Event| {
            view.request_frame();
        }));

        *self.listeners.borrow_mut() = listeners;

        if let Some(viewport) = viewport(window) {
            self.pointer.set(viewport.center());
        }
        self.render();
    }

    pub(crate) fn record_pointer(self: &Rc<Self>, x: f64, y: f64, now_ms: i64) {
        self.history.borrow_mut().record(x, y, now_ms);
        self.pointer.set(Point::new(x, y));
        self.request_frame();
    }

    fn request_frame(self: &Rc<Self>) {
        let mut gate = self.gate.get();
        let schedule = gate.notify();
        self.gate.set(gate);
        if !schedule {
            return;
        }
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            view.run_frame();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn run_frame(&self) {
        self.frame.borrow_mut().take();
        let mut gate = self.gate.get();
        let due = gate.begin_frame();
        self.gate.set(gate);
        if due {
            self.render();
        }
    }

    pub(crate) fn render(&self) {
        let pointer = self.pointer.get();
        for eye in &self.eyes {
            eye.track(pointer);
        }
        let history = self.history.borrow();
        for (marker, frame) in self.markers.iter().zip(self.layout.frames(&history)) {
            let style = marker.style();
            if let Some(transform) = frame.transform() {
                let _ = style.set_property("transform", &transform);
            }
            let _ = style.set_property("opacity", &frame.opacity.to_string());
        }
    }
}

fn create_markers(document: &Document, container: &Element, count: usize) -> Vec<HtmlElement> {
    let mut markers = Vec::with_capacity(count);
    for _ in 0..count {
        let Ok(element) = document.create_element("div") else {
            break;
        };
        element.set_class_name(TRAIL_MARKER_CLASS);
        let Ok(marker) = element.dyn_into::<HtmlElement>() else {
            break;
        };
        let _ = marker.style().set_property("opacity", "0");
        if container.append_child(&marker).is_err() {
            break;
        }
        markers.push(marker);
    }
    markers
}
