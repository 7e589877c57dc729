use std::cell::RefCell;
use std::rc::Rc;

use folio_core::HoverPreview;
use gloo::events::EventListener;
use js_sys::{Date, Math, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use crate::app_router::{load_page_settings, load_project_catalog};
use crate::cursor_style::install_cursor_style;
use crate::disclosure_view::DisclosureView;
use crate::motion_view::{EyeView, MotionView};
use crate::persisted_store::LocalStorageStore;
use crate::preview_view::PreviewView;
use crate::toggle_view::DarkModeView;

/// Everything wired up at startup. Listeners live as long as this does.
struct Page {
    motion: Option<Rc<MotionView>>,
    dark_mode: Option<Rc<DarkModeView>>,
    disclosure: Option<Rc<DisclosureView>>,
    preview: Option<Rc<PreviewView>>,
}

impl Page {
    fn features(&self) -> Vec<&'static str> {
        [
            ("motion", self.motion.is_some()),
            ("dark-mode", self.dark_mode.is_some()),
            ("disclosure", self.disclosure.is_some()),
            ("preview", self.preview.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, enabled)| enabled.then_some(name))
        .collect()
    }
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

pub(crate) fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if document_loading(&document) {
        let loaded = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            install_page(&window, &loaded);
        })
        .forget();
    } else {
        install_page(&window, &document);
    }
}

fn install_page(window: &Window, document: &Document) {
    if PAGE.with(|page| page.borrow().is_some()) {
        return;
    }
    let page = build_page(window, document);
    let features = page.features().join(", ");
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::log!("folio ready", features);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = features;
    }
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
}

fn document_loading(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}

fn page_seed() -> u64 {
    let now = Date::now() as u64;
    let noise = (Math::random() * (1u64 << 53) as f64) as u64;
    now ^ noise.rotate_left(17)
}

/// Builds each feature on its own; a feature whose elements are missing is
/// left out without affecting the others.
fn build_page(window: &Window, document: &Document) -> Page {
    let settings = load_page_settings(window, document);
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::log!(
            "folio settings",
            format!("{:?}", settings.trail_style),
            format!("{:?}", settings.preview_placement)
        );
    }

    if let Some(image) = settings.cursor_image.as_deref() {
        if let Err(err) = install_cursor_style(document, image) {
            missing("cursor style", err);
        }
    }

    let motion = build_motion(window, document, &settings);
    let dark_mode = build_dark_mode(document);
    let disclosure = build_disclosure(document);
    let preview = build_preview(window, document, &settings);

    Page {
        motion,
        dark_mode,
        disclosure,
        preview,
    }
}

fn build_motion(
    window: &Window,
    document: &Document,
    settings: &folio_core::PageSettings,
) -> Option<Rc<MotionView>> {
    let eyes: Vec<EyeView> = [".eye-left", ".eye-right"]
        .into_iter()
        .filter_map(|selector| {
            let eye = EyeView::find(document, selector);
            if eye.is_none() {
                missing("eye", selector.to_string());
            }
            eye
        })
        .collect();
    let trail = document.get_element_by_id("cursorTrail");
    if trail.is_none() {
        missing("cursor trail", "#cursorTrail".to_string());
    }
    if eyes.is_empty() && trail.is_none() {
        return None;
    }
    let view = MotionView::new(document, eyes, trail.as_ref(), settings.trail_layout());
    view.install(window, document);
    Some(view)
}

fn build_dark_mode(document: &Document) -> Option<Rc<DarkModeView>> {
    let Some(view) = DarkModeView::find(document, LocalStorageStore::open()) else {
        missing("dark mode toggle", "#darkModeToggle .toggle-thumb".to_string());
        return None;
    };
    view.install();
    Some(view)
}

fn build_disclosure(document: &Document) -> Option<Rc<DisclosureView>> {
    let Some(view) = DisclosureView::find(document) else {
        missing("about disclosure", "#aboutToggle / #aboutSection".to_string());
        return None;
    };
    view.install();
    Some(view)
}

fn build_preview(
    window: &Window,
    document: &Document,
    settings: &folio_core::PageSettings,
) -> Option<Rc<PreviewView>> {
    let hover = HoverPreview::new(
        settings.preview_placement,
        load_project_catalog(document),
        page_seed(),
    );
    let Some(view) = PreviewView::find(window, document, hover) else {
        missing("thumbnail preview", "#thumbnailPreview".to_string());
        return None;
    };
    if view.install() == 0 {
        missing("project items", ".project-item[data-project]".to_string());
    }
    Some(view)
}

fn missing(feature: &str, detail: String) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::warn!("feature disabled", feature, detail);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (feature, detail);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn missing_elements_only_disable_their_feature() {
        console_error_panic_hook::set_once();
        let window = web_sys::window().expect("window available");
        let document = window.document().expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_inner_html(
            r#"<button id="aboutToggle"><span class="toggle-icon"></span></button>
               <section id="aboutSection"></section>
               <div id="thumbnailPreview"></div>
               <div class="project-item" data-project="project-1"><span class="project-title">First</span></div>"#,
        );
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("mount test root");

        let page = build_page(&window, &document);
        assert_eq!(page.features(), vec!["disclosure", "preview"]);

        document
            .get_element_by_id("aboutToggle")
            .and_then(|control| control.dyn_into::<HtmlElement>().ok())
            .expect("about toggle")
            .click();
        let panel = document.get_element_by_id("aboutSection").expect("about section");
        assert!(panel.class_list().contains("visible"));

        let item = document
            .query_selector(".project-item")
            .ok()
            .flatten()
            .expect("project item");
        let enter = web_sys::MouseEvent::new("mouseenter").expect("mouse event");
        let _ = item.dispatch_event(&enter);
        let preview = document
            .get_element_by_id("thumbnailPreview")
            .expect("preview panel");
        assert!(preview.class_list().contains("visible"));

        if let Some(style) = document.get_element_by_id("folio-cursor-style") {
            style.remove();
        }
        root.remove();
    }
}
