use crate::make_request::make_request;
use crate::manipulate_css::add_css_rule;
use crate::outcome::AnalysisError;
use crate::set_page::{new_button, set_focus_on_element, set_status};
use crate::utility::log;
use crate::view::{error_element, loading_element, ResultView};
use crate::webpage::EmotionWebPage;
use emotion_web_common::analysis::AnalysisReport;
use gloo_events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlButtonElement, HtmlInputElement, KeyboardEvent};

/// The analysis screen: a text entry field, an analyze button, and
/// the region the outcome is rendered into
pub struct AnalysisDiv;

impl EmotionWebPage for AnalysisDiv {
    fn initialise_page(document: &Document) -> Result<Element, JsValue> {
        let analysis_div = document.create_element("div")?;
        analysis_div.set_id("analysis-div");

        // The text entry and the button that submits it
        let entry_div = document.create_element("div")?;
        entry_div.set_id("entry-div");
        let text_input: HtmlInputElement = document
            .create_element("input")
            .map_err(|err| format!("Error creating input element: {err:?}"))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|err| format!("Error casting to HtmlInputElement: {err:?}"))?;
        text_input.set_value("");
        text_input.set_type("text");
        text_input.set_id("text-to-analyze");
        entry_div.append_child(&text_input)?;

        let analyze_button = new_button(document, "analyze-button", "Analizar")?;
        entry_div.append_child(&analyze_button)?;

        // Where outcomes are rendered
        let result_div = document.create_element("div")?;
        result_div.set_id("result");

        analysis_div.append_child(&entry_div)?;
        analysis_div.append_child(&result_div)?;

        // One token per request.  Completions that do not carry the
        // latest token are dropped, so overlapping requests cannot
        // interleave their renders.
        let request_token = Rc::new(Cell::new(0u64));

        let token = request_token.clone();
        let closure =
            Closure::wrap(Box::new(move || analyse_submit_cb(token.clone())) as Box<dyn Fn()>);
        analyze_button.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();

        // Detect an <enter> key in the text field and submit
        let token = request_token.clone();
        let text_input_enter = EventListener::new(&text_input, "keyup", move |event| {
            let event: KeyboardEvent = event.clone().unchecked_into();
            if event.key_code() == 13 {
                // <enter> keycode
                analyse_submit_cb(token.clone());
            }
        });
        text_input_enter.forget();

        add_css_rule(document, "#entry-div", "display", "flex")?;
        add_css_rule(document, "#text-to-analyze", "flex-grow", "1")?;
        add_css_rule(document, "#analyze-button", "margin-left", "1em")?;
        add_css_rule(document, "#result", "margin-top", "1em")?;
        add_css_rule(document, ".error", "color", "#b00020")?;
        add_css_rule(document, ".loading", "color", "#666666")?;
        add_css_rule(document, ".scores", "border", "1px solid #cccccc")?;
        add_css_rule(document, ".emotion-bar", "background-color", "#58a6ff")?;
        add_css_rule(document, ".emotion-bar", "color", "white")?;
        add_css_rule(document, ".emotion-bar", "margin", "2px 0")?;
        add_css_rule(document, ".emotion-bar", "padding-left", ".3em")?;
        add_css_rule(document, ".emotion-bar", "white-space", "nowrap")?;

        set_focus_on_element(document, "text-to-analyze");

        Ok(analysis_div)
    }
}

/// The callback for both triggers.  One full round: validate the
/// input, disable the button, show the loading view, make the
/// request, render the outcome, re-enable the button.
fn analyse_submit_cb(request_token: Rc<Cell<u64>>) {
    let document = window()
        .and_then(|win| win.document())
        .expect("Failed to get document");
    let text_input: HtmlInputElement = document
        .get_element_by_id("text-to-analyze")
        .expect("No text-to-analyze in page")
        .dyn_into::<HtmlInputElement>()
        .map_err(|err| format!("Error casting to HtmlInputElement: {err:?}"))
        .expect("text-to-analyze must be an input");
    let text = text_input.value();

    // Whitespace-only input never reaches the network
    if text.trim().is_empty() {
        render_error(&document, &AnalysisError::EmptyInput);
        return;
    }

    // Take a fresh token.  Any earlier in-flight request is stale now
    let token = request_token.get() + 1;
    request_token.set(token);

    set_button_disabled(&document, true);
    render_loading(&document);
    set_status(&document, "Analizando texto");

    let latest = request_token.clone();
    let cb = move |outcome: Result<AnalysisReport, AnalysisError>| {
        let document = window()
            .and_then(|win| win.document())
            .expect("Failed to get document");
        if !is_current(&latest, token) {
            // A later submit superseded this request.  Its own
            // completion re-enables the button
            return;
        }
        set_button_disabled(&document, false);
        render_outcome(&document, outcome);
    };
    if let Err(err) = make_request(text.as_str(), cb) {
        set_button_disabled(&document, false);
        render_outcome(
            &document,
            Err(AnalysisError::Transport(format!("{err:?}"))),
        );
    }
}

/// A completion may only touch the page while it carries the latest
/// token
fn is_current(latest: &Cell<u64>, token: u64) -> bool {
    latest.get() == token
}

/// Render a settled outcome into the result region.  The status
/// line set when the request went out is cleared here
pub fn render_outcome(document: &Document, outcome: Result<AnalysisReport, AnalysisError>) {
    set_status(document, "");
    match outcome {
        Ok(report) if report.is_rejected() => {
            render_error(document, &AnalysisError::Rejected(report.message));
        }
        Ok(report) => render_report(document, &report),
        Err(err) => render_error(document, &err),
    }
}

fn render_report(document: &Document, report: &AnalysisReport) {
    let view = ResultView::from_report(report);
    match view.to_element(document) {
        Ok(element) => replace_result(document, &element),
        Err(err) => log(format!("Failed to build result view: {err:?}")),
    }
}

fn render_error(document: &Document, err: &AnalysisError) {
    if let Ok(element) = error_element(document, err.to_string().as_str()) {
        replace_result(document, &element);
    }
}

fn render_loading(document: &Document) {
    if let Ok(element) = loading_element(document) {
        replace_result(document, &element);
    }
}

/// Everything rendered lands in the one result region
fn replace_result(document: &Document, element: &Element) {
    if let Some(result_div) = document.get_element_by_id("result") {
        result_div.set_inner_html("");
        if let Err(err) = result_div.append_child(element) {
            log(format!("Failed to render into #result: {err:?}"));
        }
    } else {
        log("No `result` div in page.  Has not been initialised");
    }
}

fn set_button_disabled(document: &Document, disabled: bool) {
    if let Some(button) = document.get_element_by_id("analyze-button") {
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        }
    }
}
