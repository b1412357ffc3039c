#![cfg(target_arch = "wasm32")]
//! In-browser tests.  Run with `wasm-pack test --headless --firefox`.

use crate::analysis_div::render_outcome;
use crate::manipulate_css::{add_css_rule, clear_css};
use crate::outcome::AnalysisError;
use crate::set_page::{initialise_page, set_page, set_status, Pages};
use crate::view::{error_element, loading_element, ResultView};
use emotion_web_common::analysis::AnalysisReport;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn get_document() -> Document {
    web_sys::window()
        .and_then(|win| win.document())
        .expect("Failed to get document")
}

fn joy_report() -> AnalysisReport {
    serde_json::from_str(
        r#"{
            "status": 200,
            "message": "The dominant emotion is joy.",
            "scores": {
                "anger": 0.01,
                "disgust": 0.02,
                "fear": 0.03,
                "joy": 0.9,
                "sadness": 0.04
            },
            "dominant_emotion": "joy"
        }"#,
    )
    .expect("Report JSON must parse")
}

#[wasm_bindgen_test]
fn scaffold_has_main_body_and_status() {
    initialise_page().expect("Scaffold built");
    let document = get_document();
    assert!(document.get_element_by_id("main_body").is_some());
    assert!(document.get_element_by_id("status_div").is_some());
}

#[wasm_bindgen_test]
fn analysis_page_has_input_button_and_result() {
    initialise_page().expect("Scaffold built");
    set_page(Pages::AnalysisDiv).expect("Analysis page built");
    let document = get_document();
    assert!(document.get_element_by_id("text-to-analyze").is_some());
    assert!(document.get_element_by_id("analyze-button").is_some());
    assert!(document.get_element_by_id("result").is_some());
}

#[wasm_bindgen_test]
fn whitespace_submit_renders_inline_error_and_leaves_button_enabled() {
    initialise_page().expect("Scaffold built");
    set_page(Pages::AnalysisDiv).expect("Analysis page built");
    let document = get_document();
    let input: HtmlInputElement = document
        .get_element_by_id("text-to-analyze")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_value("   ");
    let button: HtmlElement = document
        .get_element_by_id("analyze-button")
        .unwrap()
        .dyn_into()
        .unwrap();
    button.click();
    let result = document.get_element_by_id("result").unwrap();
    let errors = result.get_elements_by_class_name("error");
    assert_eq!(errors.length(), 1);
    assert_eq!(
        errors.item(0).unwrap().text_content().unwrap(),
        "Error: Ingrese texto para analizar"
    );
    // No request went out, so the button was never disabled
    let button: HtmlButtonElement = document
        .get_element_by_id("analyze-button")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert!(!button.disabled());
}

#[wasm_bindgen_test]
fn completed_outcome_clears_status_and_renders_bars() {
    initialise_page().expect("Scaffold built");
    set_page(Pages::AnalysisDiv).expect("Analysis page built");
    let document = get_document();
    set_status(&document, "Analizando texto");
    render_outcome(&document, Ok(joy_report()));
    let status_div = document.get_element_by_id("status_div").unwrap();
    assert_eq!(status_div.inner_html(), "");
    let result = document.get_element_by_id("result").unwrap();
    assert_eq!(result.get_elements_by_class_name("emotion-bar").length(), 5);
}

#[wasm_bindgen_test]
fn rejected_outcome_renders_error_without_bars() {
    initialise_page().expect("Scaffold built");
    set_page(Pages::AnalysisDiv).expect("Analysis page built");
    let document = get_document();
    let report: AnalysisReport =
        serde_json::from_str(r#"{"status": 400, "message": "Invalid text! Please try again."}"#)
            .expect("Report JSON must parse");
    render_outcome(&document, Ok(report));
    let result = document.get_element_by_id("result").unwrap();
    assert_eq!(result.get_elements_by_class_name("emotion-bar").length(), 0);
    let errors = result.get_elements_by_class_name("error");
    assert_eq!(errors.length(), 1);
    assert_eq!(
        errors.item(0).unwrap().text_content().unwrap(),
        "Invalid text! Please try again."
    );
}

#[wasm_bindgen_test]
fn http_failure_outcome_renders_numeric_status() {
    initialise_page().expect("Scaffold built");
    set_page(Pages::AnalysisDiv).expect("Analysis page built");
    let document = get_document();
    render_outcome(
        &document,
        Err(AnalysisError::Http {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        }),
    );
    let result = document.get_element_by_id("result").unwrap();
    let errors = result.get_elements_by_class_name("error");
    assert_eq!(errors.length(), 1);
    assert!(errors
        .item(0)
        .unwrap()
        .text_content()
        .unwrap()
        .contains("503"));
}

#[wasm_bindgen_test]
fn success_view_builds_five_bars_and_dominant() {
    let document = get_document();
    let element = ResultView::from_report(&joy_report())
        .to_element(&document)
        .expect("View built");
    let bars = element.get_elements_by_class_name("emotion-bar");
    assert_eq!(bars.length(), 5);
    let dominant = element.get_elements_by_class_name("dominant");
    assert_eq!(dominant.length(), 1);
    assert_eq!(
        dominant.item(0).unwrap().text_content().unwrap(),
        "Emoción dominante: joy"
    );
}

#[wasm_bindgen_test]
fn error_view_does_not_interpret_markup() {
    let document = get_document();
    let element = error_element(&document, "<script>alert(1)</script>").expect("Error view built");
    assert_eq!(element.class_name(), "error");
    // The text landed as text, not as an element
    assert_eq!(element.child_element_count(), 0);
    assert_eq!(
        element.text_content().unwrap(),
        "<script>alert(1)</script>"
    );
}

#[wasm_bindgen_test]
fn loading_view_is_the_analysing_notice() {
    let document = get_document();
    let element = loading_element(&document).expect("Loading view built");
    assert_eq!(element.class_name(), "loading");
    assert_eq!(element.text_content().unwrap(), "Analizando...");
}

#[wasm_bindgen_test]
fn status_line_is_escaped() {
    initialise_page().expect("Scaffold built");
    let document = get_document();
    set_status(&document, "a < b");
    let status_div = document.get_element_by_id("status_div").unwrap();
    assert_eq!(status_div.inner_html(), "a &lt; b");
}

#[wasm_bindgen_test]
fn css_rules_accumulate_and_clear() {
    let document = get_document();
    clear_css(&document).expect("cleared CSS");
    add_css_rule(&document, ".error", "color", "#b00020").expect("added rule");
    add_css_rule(&document, ".loading", "color", "#666666").expect("added rule");
    let style = document.query_selector("style").unwrap().unwrap();
    assert!(style.inner_html().contains(".error"));
    assert!(style.inner_html().contains(".loading"));
    clear_css(&document).expect("cleared CSS");
    let style = document.query_selector("style").unwrap().unwrap();
    assert!(style.inner_html().is_empty());
}
