use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{HoverPreview, Point, SafeRect, Viewport, PREVIEW_SIZE};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, MouseEvent, Window};

use crate::input::{viewport, PointerPoint};

const VISIBLE_CLASS: &str = "visible";

/// Hover previews for `.project-item[data-project]` rows, drawn in `#thumbnailPreview`.
pub(crate) struct PreviewView {
    window: Window,
    document: Document,
    panel: HtmlElement,
    image: HtmlImageElement,
    preview: RefCell<HoverPreview>,
    listeners: RefCell<Vec<EventListener>>,
}

impl PreviewView {
    pub(crate) fn find(window: &Window, document: &Document, preview: HoverPreview) -> Option<Rc<Self>> {
        let panel = document
            .get_element_by_id("thumbnailPreview")?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let image = match panel.query_selector("img").ok().flatten() {
            Some(image) => image.dyn_into::<HtmlImageElement>().ok()?,
            None => {
                let image = document
                    .create_element("img")
                    .ok()?
                    .dyn_into::<HtmlImageElement>()
                    .ok()?;
                panel.append_child(&image).ok()?;
                image
            }
        };
        Some(Rc::new(Self {
            window: window.clone(),
            document: document.clone(),
            panel,
            image,
            preview: RefCell::new(preview),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    /// Binds every project item present now. Returns how many were bound.
    pub(crate) fn install(self: &Rc<Self>) -> usize {
        let Ok(items) = self.document.query_selector_all(".project-item[data-project]") else {
            return 0;
        };
        let mut listeners = Vec::new();
        for index in 0..items.length() {
            let Some(item) = items
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let project_id = item.get_attribute("data-project").unwrap_or_default();
            let title = item
                .query_selector(".project-title")
                .ok()
                .flatten()
                .and_then(|title| title.text_content())
                .unwrap_or_default()
                .trim()
                .to_string();

            let view = Rc::clone(self);
            listeners.push(EventListener::new(&item, "mouseenter", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                view.enter(&project_id, &title, PointerPoint::from_mouse(event).point());
            }));

            let view = Rc::clone(self);
            listeners.push(EventListener::new(&item, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                view.pointer_move(PointerPoint::from_mouse(event).point());
            }));

            let view = Rc::clone(self);
            listeners.push(EventListener::new(&item, "mouseleave", move |_event| {
                view.leave();
            }));
        }
        let bound = listeners.len() / 3;
        *self.listeners.borrow_mut() = listeners;
        bound
    }

    fn viewport(&self) -> Viewport {
        viewport(&self.window).unwrap_or_else(|| Viewport::new(PREVIEW_SIZE, PREVIEW_SIZE))
    }

    fn safe_rect(&self, viewport: Viewport) -> SafeRect {
        let header_bottom = self
            .document
            .query_selector("header")
            .ok()
            .flatten()
            .map(|header| header.get_bounding_client_rect().bottom())
            .unwrap_or(0.0);
        let footer_top = self
            .document
            .query_selector("footer")
            .ok()
            .flatten()
            .map(|footer| footer.get_bounding_client_rect().top())
            .unwrap_or(viewport.height);
        SafeRect::between(viewport, header_bottom, footer_top, PREVIEW_SIZE)
    }

    fn enter(&self, project_id: &str, title: &str, pointer: Point) {
        let viewport = self.viewport();
        let safe = self.safe_rect(viewport);
        let mut preview = self.preview.borrow_mut();
        let Some(active) = preview.enter(project_id, pointer, viewport, &safe) else {
            self.hide();
            return;
        };
        self.image.set_src(&active.image);
        self.image.set_alt(title);
        self.place(active.position);
        let _ = self.panel.class_list().add_1(VISIBLE_CLASS);
    }

    fn pointer_move(&self, pointer: Point) {
        let viewport = self.viewport();
        let position = self.preview.borrow_mut().pointer_move(pointer, viewport);
        if let Some(position) = position {
            self.place(position);
        }
    }

    fn leave(&self) {
        self.preview.borrow_mut().leave();
        self.hide();
    }

    fn place(&self, position: Point) {
        let style = self.panel.style();
        let _ = style.set_property("left", &format!("{}px", position.x));
        let _ = style.set_property("top", &format!("{}px", position.y));
    }

    fn hide(&self) {
        let _ = self.panel.class_list().remove_1(VISIBLE_CLASS);
    }
}
