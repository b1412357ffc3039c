use crate::analysis_div::AnalysisDiv;
use crate::filters::text_for_html;
use crate::manipulate_css::add_css_rule;
use crate::utility::log;
use crate::webpage::EmotionWebPage;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlButtonElement, HtmlElement};

pub enum Pages {
    AnalysisDiv,
}

/// Display a page in the scaffold's main body.
pub fn set_page(page: Pages) -> Result<(), JsValue> {
    let document = get_doc();
    let e = match page {
        Pages::AnalysisDiv => AnalysisDiv::initialise_page(&document)?,
    };
    if let Some(main_body) = document.get_element_by_id("main_body") {
        main_body.set_inner_html("");
        main_body.append_child(&e)?;
    } else {
        log("No `main_body` in page.  Has not been initialised");
    }
    Ok(())
}

/// Put a line in the status footer.
pub fn set_status(document: &Document, status: &str) {
    let status = text_for_html(status);
    if let Some(status_element) = document.get_element_by_id("status_div") {
        status_element.set_inner_html(status.as_str());
    } else {
        log(format!("Status (no status_div): {status}"));
    }
}

pub fn set_focus_on_element(document: &Document, element_id: &str) {
    if let Some(element) = document.get_element_by_id(element_id) {
        if let Some(input) = element.dyn_ref::<HtmlElement>() {
            if let Err(err) = input.focus() {
                log(format!("Failed to set focus on {element_id}: {err:?}"));
            }
        } else {
            log(format!(
                "Failed to set focus. Found {element_id} but is not a HtmlElement"
            ));
        }
    } else {
        log(format!("Failed to set focus.  Could not find: {element_id}"));
    }
}

/// Set up the basic page with header, main body, and status footer
pub fn initialise_page() -> Result<(), JsValue> {
    let document = get_doc();
    let body = document.body().expect("Could not access document.body");
    while let Some(child) = body.first_child() {
        let _ = body.remove_child(&child);
    }

    let header_div = document.create_element("div")?;
    header_div.set_id("header");
    let title = document.create_element("h1")?;
    title.set_text_content(Some("Detector de Emociones"));
    header_div.append_child(&title)?;

    let main_body = document.create_element("div")?;
    main_body.set_id("main_body");

    let footer_div = document.create_element("div")?;
    footer_div.set_id("footer");
    let status_div = document.create_element("div")?;
    status_div.set_id("status_div");
    footer_div.append_child(&status_div)?;

    body.append_child(&header_div)?;
    body.append_child(&main_body)?;
    body.append_child(&footer_div)?;

    add_css_rule(&document, "html, body", "height", "100%")?;
    add_css_rule(&document, "html, body", "margin", "0")?;
    add_css_rule(&document, "#header", "border-bottom", "1px solid black")?;
    add_css_rule(&document, "#header", "padding-left", "1em")?;
    add_css_rule(&document, "#main_body", "padding", "1em")?;
    add_css_rule(&document, "#footer", "color", "#666666")?;
    add_css_rule(&document, "#footer", "font-size", "small")?;
    add_css_rule(&document, "#footer", "padding-left", "1em")?;

    Ok(())
}

/// Make a button
pub fn new_button(
    document: &Document,
    id: &str,
    display: &str,
) -> Result<HtmlButtonElement, JsValue> {
    let result: HtmlButtonElement = document
        .create_element("button")
        .map_err(|err| format!("Error creating button element: {err:?}"))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|err| format!("Error casting to HtmlButtonElement: {err:?}"))?;

    result.set_id(id);
    result.set_inner_text(display);

    Ok(result)
}

pub fn get_doc() -> Document {
    window()
        .and_then(|win| win.document())
        .expect("Failed to get document")
}
