use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{DarkModeToggle, ToggleOutcome, ToggleState, TrackGeometry};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use crate::input::{now_ms, PointerPoint};
use crate::persisted_store::LocalStorageStore;

const DARK_MODE_CLASS: &str = "dark-mode";
const ACTIVE_CLASS: &str = "active";
const THUMB_TRANSITION: &str = "transform 0.3s ease";

fn thumb_transform(offset: f64) -> String {
    format!("translateX({offset}px) translateY(-50%)")
}

/// Touches, and mouse presses with the main button.
fn is_primary_press(event: &Event) -> bool {
    event
        .dyn_ref::<MouseEvent>()
        .map_or(true, |event| event.button() == 0)
}

fn blocking_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

/// `#darkModeToggle`: click or drag the thumb, state kept in local storage.
pub(crate) struct DarkModeView {
    document: Document,
    control: HtmlElement,
    track: Element,
    thumb: HtmlElement,
    toggle: RefCell<DarkModeToggle<LocalStorageStore>>,
    listeners: RefCell<Vec<EventListener>>,
    drag_listeners: RefCell<Vec<EventListener>>,
}

impl DarkModeView {
    pub(crate) fn find(document: &Document, store: LocalStorageStore) -> Option<Rc<Self>> {
        let control = document
            .get_element_by_id("darkModeToggle")?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let thumb = control
            .query_selector(".toggle-thumb")
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()?;
        let track = control
            .query_selector(".toggle-track")
            .ok()
            .flatten()
            .unwrap_or_else(|| control.clone().into());
        Some(Rc::new(Self {
            document: document.clone(),
            control,
            track,
            thumb,
            toggle: RefCell::new(DarkModeToggle::load(store)),
            listeners: RefCell::new(Vec::new()),
            drag_listeners: RefCell::new(Vec::new()),
        }))
    }

    pub(crate) fn install(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.control, "click", move |_event| {
            view.on_click();
        }));

        for event_name in ["mousedown", "touchstart"] {
            let view = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &self.thumb,
                event_name,
                blocking_options(),
                move |event: &Event| {
                    if !is_primary_press(event) {
                        return;
                    }
                    let Some(point) = PointerPoint::from_event(event) else {
                        return;
                    };
                    event.prevent_default();
                    event.stop_propagation();
                    view.on_press(point.client_x);
                },
            ));
        }

        *self.listeners.borrow_mut() = listeners;
        self.show(self.state(), self.track().rest_offset(self.state()));
    }

    pub(crate) fn state(&self) -> ToggleState {
        self.toggle.borrow().state()
    }

    fn track(&self) -> TrackGeometry {
        let rect = self.track.get_bounding_client_rect();
        TrackGeometry::new(rect.left(), rect.width())
    }

    fn on_click(&self) {
        let outcome = self.toggle.borrow_mut().click(&self.track(), now_ms());
        if let Some(outcome) = outcome {
            self.settle(outcome);
        }
    }

    fn on_press(self: &Rc<Self>, pointer_x: f64) {
        if self.toggle.borrow().is_dragging() {
            return;
        }
        self.toggle.borrow_mut().drag_start(pointer_x, &self.track());
        let _ = self.thumb.style().set_property("transition", "none");
        self.attach_drag_listeners();
    }

    fn on_drag(&self, pointer_x: f64) {
        let offset = self.toggle.borrow_mut().drag_move(pointer_x, &self.track());
        if let Some(offset) = offset {
            let _ = self
                .thumb
                .style()
                .set_property("transform", &thumb_transform(offset));
        }
    }

    fn on_release(&self, touch: bool) {
        if self.toggle.borrow().is_tap() {
            self.on_cancel();
            // Touch presses suppress the browser click; mouse taps still get one.
            if touch {
                self.on_click();
            }
            return;
        }
        let outcome = self
            .toggle
            .borrow_mut()
            .drag_release(&self.track(), now_ms());
        self.finish_drag();
        if let Some(outcome) = outcome {
            self.settle(outcome);
        }
    }

    fn on_cancel(&self) {
        let offset = self.toggle.borrow_mut().cancel_drag(&self.track());
        self.finish_drag();
        if let Some(offset) = offset {
            self.show(self.state(), offset);
        }
    }

    fn attach_drag_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        for event_name in ["mousemove", "touchmove"] {
            let view = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &self.document,
                event_name,
                blocking_options(),
                move |event: &Event| {
                    let Some(point) = PointerPoint::from_event(event) else {
                        return;
                    };
                    event.prevent_default();
                    view.on_drag(point.client_x);
                },
            ));
        }
        for (event_name, touch) in [("mouseup", false), ("touchend", true)] {
            let view = Rc::clone(self);
            listeners.push(EventListener::new(&self.document, event_name, move |_event| {
                view.on_release(touch);
            }));
        }
        let view = Rc::clone(self);
        listeners.push(EventListener::new(&self.document, "touchcancel", move |_event| {
            view.on_cancel();
        }));
        *self.drag_listeners.borrow_mut() = listeners;
    }

    fn finish_drag(&self) {
        let _ = self
            .thumb
            .style()
            .set_property("transition", THUMB_TRANSITION);
        // Closures still on the stack are released by wasm-bindgen after they return.
        let listeners = std::mem::take(&mut *self.drag_listeners.borrow_mut());
        drop(listeners);
    }

    fn settle(&self, outcome: ToggleOutcome) {
        self.show(outcome.state, outcome.thumb_offset);
        #[cfg(target_arch = "wasm32")]
        {
            if outcome.changed {
                gloo::console::log!("dark mode", outcome.state.as_stored());
            }
        }
    }

    fn show(&self, state: ToggleState, offset: f64) {
        let _ = self
            .thumb
            .style()
            .set_property("transform", &thumb_transform(offset));
        let on = state.is_on();
        if let Some(body) = self.document.body() {
            let _ = body.class_list().toggle_with_force(DARK_MODE_CLASS, on);
        }
        let _ = self.control.class_list().toggle_with_force(ACTIVE_CLASS, on);
        let _ = self
            .control
            .set_attribute("aria-pressed", if on { "true" } else { "false" });
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use folio_core::{PreferenceStore, DARK_MODE_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"<button id="darkModeToggle" style="position:fixed;left:0;top:0;width:41px;height:22px;padding:0">
        <span class="toggle-track" style="display:block;width:41px;height:22px"></span>
        <span class="toggle-thumb" style="position:absolute;left:2px;top:50%;width:18px;height:18px"></span>
      </button>"#;

    fn document() -> Document {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
    }

    fn mount() -> (Document, Element) {
        console_error_panic_hook::set_once();
        let document = document();
        let root = document.create_element("div").expect("create test root");
        root.set_inner_html(FIXTURE);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("mount test root");
        (document, root)
    }

    fn reset_store() -> LocalStorageStore {
        let mut store = LocalStorageStore::open();
        store.set(DARK_MODE_KEY, "false").expect("reset stored flag");
        store
    }

    fn body_is_dark(document: &Document) -> bool {
        document
            .body()
            .expect("body available")
            .class_list()
            .contains(DARK_MODE_CLASS)
    }

    #[wasm_bindgen_test]
    fn click_flips_and_persists() {
        let (document, root) = mount();
        let view = DarkModeView::find(&document, reset_store()).expect("toggle fixture");
        view.install();
        assert!(!body_is_dark(&document));

        view.control.click();
        assert_eq!(view.state(), ToggleState::On);
        assert!(body_is_dark(&document));
        assert_eq!(
            LocalStorageStore::open().get(DARK_MODE_KEY).as_deref(),
            Some("true")
        );
        assert_eq!(view.control.get_attribute("aria-pressed").as_deref(), Some("true"));

        view.control.click();
        assert_eq!(view.state(), ToggleState::Off);
        assert!(!body_is_dark(&document));
        assert_eq!(
            LocalStorageStore::open().get(DARK_MODE_KEY).as_deref(),
            Some("false")
        );
        root.remove();
    }

    #[wasm_bindgen_test]
    fn drag_past_midpoint_turns_on() {
        let (document, root) = mount();
        let view = DarkModeView::find(&document, reset_store()).expect("toggle fixture");
        view.install();

        view.on_press(5.0);
        assert_eq!(view.drag_listeners.borrow().len(), 5);
        assert_eq!(
            view.thumb.style().get_property_value("transition").unwrap_or_default(),
            "none"
        );
        view.on_drag(30.0);
        view.on_release(false);

        assert_eq!(view.state(), ToggleState::On);
        assert!(view.drag_listeners.borrow().is_empty());
        assert!(view.control.class_list().contains(ACTIVE_CLASS));
        view.on_click();
        assert_eq!(view.state(), ToggleState::On, "follow-up click is swallowed");
        let _ = document.body().map(|body| body.class_list().remove_1(DARK_MODE_CLASS));
        reset_store();
        root.remove();
    }

    fn mouse_event(kind: &str, button: i16) -> MouseEvent {
        let init = web_sys::MouseEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        init.set_button(button);
        init.set_client_x(5);
        MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event")
    }

    #[wasm_bindgen_test]
    fn secondary_button_press_is_ignored() {
        let (document, root) = mount();
        let view = DarkModeView::find(&document, reset_store()).expect("toggle fixture");
        view.install();

        for button in [1, 2] {
            let _ = view.thumb.dispatch_event(&mouse_event("mousedown", button));
            assert!(!view.toggle.borrow().is_dragging());
            assert!(view.drag_listeners.borrow().is_empty());
            let _ = document.dispatch_event(&mouse_event("mouseup", button));
        }
        assert_eq!(view.state(), ToggleState::Off);
        assert_eq!(
            LocalStorageStore::open().get(DARK_MODE_KEY).as_deref(),
            Some("false")
        );

        let _ = view.thumb.dispatch_event(&mouse_event("mousedown", 0));
        assert!(view.toggle.borrow().is_dragging());
        let _ = document.dispatch_event(&mouse_event("mouseup", 0));
        assert!(!view.toggle.borrow().is_dragging());
        root.remove();
    }

    #[wasm_bindgen_test]
    fn touch_tap_flips_once() {
        let (document, root) = mount();
        let view = DarkModeView::find(&document, reset_store()).expect("toggle fixture");
        view.install();

        view.on_press(5.0);
        view.on_drag(7.0);
        view.on_release(true);
        assert_eq!(view.state(), ToggleState::On);
        assert!(view.drag_listeners.borrow().is_empty());

        view.on_press(25.0);
        view.on_release(false);
        assert_eq!(view.state(), ToggleState::On, "mouse taps wait for the browser click");
        view.on_click();
        assert_eq!(view.state(), ToggleState::Off);
        let _ = document.body().map(|body| body.class_list().remove_1(DARK_MODE_CLASS));
        reset_store();
        root.remove();
    }
}
