use web_sys::Document;

const CURSOR_STYLE_ID: &str = "folio-cursor-style";

/// Stylesheet text forcing the custom cursor on every element and pseudo-element.
pub(crate) fn cursor_rule(image: &str) -> String {
    let url = image.replace('\'', "%27");
    format!("*, *::before, *::after {{ cursor: url('{url}') 0 0, none !important; }}")
}

/// Installs (or replaces) the page-wide cursor rule in `<head>`.
pub(crate) fn install_cursor_style(document: &Document, image: &str) -> Result<(), String> {
    let rule = cursor_rule(image);
    if let Some(existing) = document.get_element_by_id(CURSOR_STYLE_ID) {
        existing.set_text_content(Some(&rule));
        return Ok(());
    }
    let head = document.head().ok_or("document has no head")?;
    let style = document
        .create_element("style")
        .map_err(|_| "failed to create style element".to_string())?;
    style.set_id(CURSOR_STYLE_ID);
    style.set_text_content(Some(&rule));
    head.append_child(&style)
        .map_err(|_| "failed to attach cursor style".to_string())?;
    Ok(())
}
