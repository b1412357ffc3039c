/// Make a XmlHttpRequest to the analysis endpoint.
use crate::outcome::AnalysisError;
use crate::utility::log_error;
use emotion_web_common::analysis::AnalysisReport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::XmlHttpRequest;

/// Issue the GET for one round of analysis.  `text` goes out as the
/// URL-encoded `text` query parameter.  `callback` receives the
/// parsed report, or the error to display, once the exchange
/// settles.
pub fn make_request(
    text: &str,
    callback: impl FnMut(Result<AnalysisReport, AnalysisError>) + 'static,
) -> Result<XmlHttpRequest, JsValue> {
    let uri = analysis_uri(text);
    let xhr: XmlHttpRequest = XmlHttpRequest::new()?;
    xhr.open("GET", uri.as_str())?;

    // The load and error handlers share the one callback
    let callback = Rc::new(RefCell::new(callback));

    let xhr_clone = xhr.clone();
    let callback_onload = callback.clone();
    let cb = Closure::wrap(Box::new(move |_data: JsValue| {
        let outcome = read_response(&xhr_clone);
        if let Err(ref err) = outcome {
            log_error(format!("/emotionDetector: {err}"));
        }
        (*callback_onload.borrow_mut())(outcome);
    }) as Box<dyn FnMut(_)>);
    xhr.set_onload(Some(cb.as_ref().unchecked_ref()));
    cb.forget();

    let callback_onerror = callback.clone();
    let cb = Closure::wrap(Box::new(move |_data: JsValue| {
        log_error("/emotionDetector: request failed at the transport layer");
        (*callback_onerror.borrow_mut())(Err(AnalysisError::Transport(
            "la petición no pudo completarse".to_string(),
        )));
    }) as Box<dyn FnMut(_)>);
    xhr.set_onerror(Some(cb.as_ref().unchecked_ref()));
    cb.forget();

    xhr.send()?;

    Ok(xhr)
}

/// The URI for one round: the fixed endpoint path with the text
/// carried as the URL-encoded `text` query parameter.
pub fn analysis_uri(text: &str) -> String {
    format!("/emotionDetector?text={}", urlencoding::encode(text))
}

/// Turn a settled exchange into a report or a displayable error.
/// Any non-2xx status is an error; a 2xx body that is not a report
/// counts as a transport failure.
fn read_response(xhr: &XmlHttpRequest) -> Result<AnalysisReport, AnalysisError> {
    let status = xhr.status().unwrap_or(0);
    if !(200..300).contains(&status) {
        let status_text = xhr.status_text().unwrap_or_default();
        return Err(AnalysisError::Http {
            status,
            status_text,
        });
    }
    let body = match xhr.response_text() {
        Ok(Some(body)) => body,
        _ => return Err(AnalysisError::Transport("respuesta vacía".to_string())),
    };
    serde_json::from_str::<AnalysisReport>(body.as_str())
        .map_err(|err| AnalysisError::Transport(err.to_string()))
}
