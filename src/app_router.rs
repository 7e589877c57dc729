use folio_core::{PageSettings, ProjectCatalog, ProjectEntry};
use web_sys::{Document, UrlSearchParams, Window};

const SETTINGS_SCRIPT_ID: &str = "folio-settings";
const CATALOG_SCRIPT_ID: &str = "project-thumbnails";
const SETTING_KEYS: [&str; 5] = ["trail", "preview", "trail-length", "trail-stride", "cursor"];

/// Page settings from, in increasing precedence: the embedded JSON block, the
/// `<body data-*>` attributes and the URL query.
pub(crate) fn load_page_settings(window: &Window, document: &Document) -> PageSettings {
    let mut settings = match read_json_block(document, SETTINGS_SCRIPT_ID) {
        Some(text) => match serde_json::from_str::<PageSettings>(&text) {
            Ok(settings) => settings,
            Err(err) => {
                warn_setting(SETTINGS_SCRIPT_ID, err.to_string());
                PageSettings::default()
            }
        },
        None => PageSettings::default(),
    };
    settings.normalize();

    if let Some(body) = document.body() {
        for key in SETTING_KEYS {
            if let Some(value) = body.get_attribute(&format!("data-{key}")) {
                apply_setting(&mut settings, key, &value);
            }
        }
    }

    if let Some(params) = query_params(window) {
        for key in SETTING_KEYS {
            if let Some(value) = params.get(key) {
                apply_setting(&mut settings, key, &value);
            }
        }
    }
    settings
}

/// Thumbnail lookup table: the page's JSON override when present and valid,
/// the built-in table otherwise.
pub(crate) fn load_project_catalog(document: &Document) -> ProjectCatalog {
    let Some(text) = read_json_block(document, CATALOG_SCRIPT_ID) else {
        return ProjectCatalog::builtin();
    };
    match parse_catalog(&text) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn_setting(CATALOG_SCRIPT_ID, err);
            ProjectCatalog::builtin()
        }
    }
}

fn parse_catalog(text: &str) -> Result<ProjectCatalog, String> {
    let entries: Vec<ProjectEntry> = serde_json::from_str(text).map_err(|err| err.to_string())?;
    let catalog = ProjectCatalog::from_entries(entries);
    if catalog.is_empty() {
        return Err("no usable entries".to_string());
    }
    Ok(catalog)
}

fn read_json_block(document: &Document, id: &str) -> Option<String> {
    let script = document.get_element_by_id(id)?;
    let text = script.text_content()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn query_params(window: &Window) -> Option<UrlSearchParams> {
    let search = window.location().search().ok()?;
    if search.is_empty() {
        return None;
    }
    UrlSearchParams::new_with_str(&search).ok()
}

fn apply_setting(settings: &mut PageSettings, key: &str, value: &str) {
    if let Err(err) = settings.apply(key, value) {
        warn_setting(key, err);
    }
}

fn warn_setting(source: &str, message: String) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo::console::warn!("ignoring setting", source, message);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (source, message);
    }
}
