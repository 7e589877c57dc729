use folio_core::{Point, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent, Window};

/// Client-space position of the pointer that drove an event.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointerPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerPoint {
    pub(crate) fn from_mouse(event: &MouseEvent) -> Self {
        Self {
            client_x: event.client_x() as f64,
            client_y: event.client_y() as f64,
        }
    }

    /// First active touch, falling back to the touch that just ended.
    pub(crate) fn from_touch(event: &TouchEvent) -> Option<Self> {
        let touch = event
            .touches()
            .item(0)
            .or_else(|| event.changed_touches().item(0))?;
        Some(Self {
            client_x: touch.client_x() as f64,
            client_y: touch.client_y() as f64,
        })
    }

    pub(crate) fn from_event(event: &Event) -> Option<Self> {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            return Some(Self::from_mouse(event));
        }
        event.dyn_ref::<TouchEvent>().and_then(Self::from_touch)
    }

    pub(crate) fn point(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}

pub(crate) fn viewport(window: &Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Viewport::new(width, height))
}

pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}
