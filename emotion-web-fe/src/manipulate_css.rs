use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlStyleElement};

/// The single style element rules are collected in, created on
/// first use.
fn get_style_element(document: &Document) -> Result<HtmlStyleElement, JsValue> {
    if let Some(existing_style) = document.query_selector("style")? {
        Ok(existing_style.dyn_into::<HtmlStyleElement>()?)
    } else {
        let style_element = document
            .create_element("style")?
            .dyn_into::<HtmlStyleElement>()?;
        document
            .head()
            .ok_or_else(|| JsValue::from_str("Document has no head"))?
            .append_child(&style_element)?;
        Ok(style_element)
    }
}

/// Append a style rule to the page.
/// Generic parameter `T` allows `value` to be `&str` or `String`
pub fn add_css_rule<T: Into<String>>(
    document: &Document,
    selector: &str,
    property: &str,
    value: T,
) -> Result<(), JsValue> {
    let value: String = value.into();
    let style_element = get_style_element(document)?;
    let existing_css = style_element.inner_html();
    let css_rule = format!("{selector} {{ {property}: {value} }}\n");
    style_element.set_inner_html(format!("{existing_css}{css_rule}").as_str());
    Ok(())
}

#[allow(dead_code)]
pub fn clear_css(document: &Document) -> Result<(), JsValue> {
    let style_element = get_style_element(document)?;
    style_element.set_inner_html("");
    Ok(())
}
