//! Build the result region's content.  A report is mapped to a view
//! model first and DOM nodes are built from that, so no server or
//! user text is ever interpolated into raw markup.

use emotion_web_common::analysis::{AnalysisReport, Emotion};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Display label for an emotion category.
pub fn label(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anger => "Ira",
        Emotion::Disgust => "Disgusto",
        Emotion::Fear => "Miedo",
        Emotion::Joy => "Alegría",
        Emotion::Sadness => "Tristeza",
    }
}

/// One bar of the score display.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    pub label: &'static str,
    /// Percentage width, the score fraction times 100.  A missing
    /// score becomes a zero-width bar rather than an error.
    pub width_pct: f64,
}

/// What the result region shows for an accepted analysis: the
/// service's message, one bar per emotion, and the dominant emotion.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub message: String,
    pub bars: Vec<ScoreBar>,
    pub dominant: String,
}

impl ResultView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let bars = Emotion::ALL
            .iter()
            .map(|&emotion| ScoreBar {
                label: label(emotion),
                width_pct: report.scores.get(emotion).unwrap_or(0.0) * 100.0,
            })
            .collect();
        Self {
            message: report.message.clone(),
            bars,
            dominant: report.dominant_emotion.clone().unwrap_or_default(),
        }
    }

    /// Build the success view
    pub fn to_element(&self, document: &Document) -> Result<Element, JsValue> {
        let container = document.create_element("div")?;
        container.set_class_name("result-container");

        let message = document.create_element("p")?;
        message.set_text_content(Some(self.message.as_str()));
        container.append_child(&message)?;

        let scores_div = document.create_element("div")?;
        scores_div.set_class_name("scores");
        for bar in &self.bars {
            let bar_div: HtmlElement = document
                .create_element("div")?
                .dyn_into::<HtmlElement>()
                .map_err(|err| format!("Error casting to HtmlElement: {err:?}"))?;
            bar_div.set_class_name("emotion-bar");
            bar_div.set_inner_text(bar.label);
            bar_div
                .style()
                .set_property("width", format!("{}%", bar.width_pct).as_str())?;
            scores_div.append_child(&bar_div)?;
        }
        container.append_child(&scores_div)?;

        let dominant_p = document.create_element("p")?;
        dominant_p.set_class_name("dominant");
        let lead = document.create_text_node("Emoción dominante: ");
        dominant_p.append_child(&lead)?;
        let strong = document.create_element("strong")?;
        strong.set_text_content(Some(self.dominant.as_str()));
        dominant_p.append_child(&strong)?;
        container.append_child(&dominant_p)?;

        Ok(container)
    }
}

/// An inline error paragraph
pub fn error_element(document: &Document, message: &str) -> Result<Element, JsValue> {
    let p = document.create_element("p")?;
    p.set_class_name("error");
    p.set_text_content(Some(message));
    Ok(p)
}

/// The paragraph shown while a request is in flight
pub fn loading_element(document: &Document) -> Result<Element, JsValue> {
    let p = document.create_element("p")?;
    p.set_class_name("loading");
    p.set_text_content(Some("Analizando..."));
    Ok(p)
}
