use std::cell::RefCell;
use std::rc::Rc;

use folio_core::disclosure::DISCLOSURE_GLYPH;
use folio_core::{Disclosure, DisclosureState};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const VISIBLE_CLASS: &str = "visible";
const ACTIVE_CLASS: &str = "active";

/// `#aboutToggle` showing and hiding `#aboutSection`.
pub(crate) struct DisclosureView {
    control: Element,
    panel: Element,
    icon: Option<HtmlElement>,
    disclosure: RefCell<Disclosure>,
    listener: RefCell<Option<EventListener>>,
}

impl DisclosureView {
    pub(crate) fn find(document: &Document) -> Option<Rc<Self>> {
        let control = document.get_element_by_id("aboutToggle")?;
        let panel = document.get_element_by_id("aboutSection")?;
        let icon = control
            .query_selector(".toggle-icon")
            .ok()
            .flatten()
            .and_then(|icon| icon.dyn_into::<HtmlElement>().ok());
        Some(Rc::new(Self {
            control,
            panel,
            icon,
            disclosure: RefCell::new(Disclosure::new()),
            listener: RefCell::new(None),
        }))
    }

    pub(crate) fn install(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let listener = EventListener::new(&self.control, "click", move |_event| {
            let state = view.disclosure.borrow_mut().toggle();
            view.show(state);
        });
        *self.listener.borrow_mut() = Some(listener);
        self.show(self.disclosure.borrow().state());
    }

    fn show(&self, state: DisclosureState) {
        let open = state.is_open();
        let _ = self.panel.class_list().toggle_with_force(VISIBLE_CLASS, open);
        let _ = self.control.class_list().toggle_with_force(ACTIVE_CLASS, open);
        let _ = self
            .control
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
        if let Some(icon) = &self.icon {
            icon.set_text_content(Some(DISCLOSURE_GLYPH));
            let _ = icon
                .style()
                .set_property("transform", &state.glyph_transform());
        }
    }
}
