use set_page::set_page;
use set_page::Pages;
use wasm_bindgen::prelude::*;

mod analysis_div;
mod filters;
mod make_request;
mod manipulate_css;
mod outcome;
mod set_page;
mod utility;
mod view;
mod webpage;

#[cfg(test)]
mod tests;

// Called when the wasm module is instantiated
#[wasm_bindgen(start)]
fn main() -> Result<(), JsValue> {
    start_app()
}

fn start_app() -> Result<(), JsValue> {
    set_page::initialise_page()?;
    set_page(Pages::AnalysisDiv)?;
    Ok(())
}
