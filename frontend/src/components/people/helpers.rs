//! Helpers for the people registration component: spreadsheet MIME
//! validation and the transient snackbar notification.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// MIME type of `.xlsx` spreadsheets.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// MIME type of legacy `.xls` spreadsheets.
pub const XLS_MIME: &str = "application/vnd.ms-excel";

/// A file is accepted only if its declared media type is one of the two
/// recognized spreadsheet types. No extension fallback, no content
/// sniffing.
pub fn is_excel_mime(mime: &str) -> bool {
    mime == XLSX_MIME || mime == XLS_MIME
}

/// Displays a dismissible snackbar at the bottom of the screen. Clicking
/// the snackbar removes it; otherwise it removes itself after a few
/// seconds.
pub fn show_snackbar(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(snackbar), Ok(text), Ok(action), Some(body)) = (
                document.create_element("div"),
                document.create_element("span"),
                document.create_element("span"),
                document.body(),
            ) {
                // The message goes in as a text node, never as markup.
                text.set_text_content(Some(message));
                action.set_class_name("snackbar-action");
                action.set_text_content(Some("Accept"));
                let html_snackbar: HtmlElement = snackbar.unchecked_into();
                html_snackbar.set_class_name("snackbar");
                html_snackbar.append_child(&text).ok();
                html_snackbar.append_child(&action).ok();
                let style = html_snackbar.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.85)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("cursor", "pointer").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                let dismiss = js_sys::Function::new_no_args("this.remove()");
                html_snackbar.set_onclick(Some(&dismiss));

                if body.append_child(&html_snackbar).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(4000).await;
                        if let Some(parent) = html_snackbar.parent_node() {
                            parent.remove_child(&html_snackbar).ok();
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_both_spreadsheet_mime_types() {
        assert!(is_excel_mime(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ));
        assert!(is_excel_mime("application/vnd.ms-excel"));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!is_excel_mime("text/plain"));
        assert!(!is_excel_mime("application/pdf"));
        assert!(!is_excel_mime("text/csv"));
        assert!(!is_excel_mime(""));
        // No case folding and no prefix matching.
        assert!(!is_excel_mime("Application/vnd.ms-excel"));
        assert!(!is_excel_mime("application/vnd.ms-excel; charset=utf-8"));
    }
}
