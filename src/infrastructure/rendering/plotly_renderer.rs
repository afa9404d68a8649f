use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::domain::{
    errors::{AppError, RenderingResult},
    logging::LogComponent,
    plot::PlotPayload,
};
use crate::log_debug;

#[wasm_bindgen]
extern "C" {
    // Throws (caught) when the Plotly script is not on the page.
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(target: &HtmlElement, data: &JsValue, layout: &JsValue) -> Result<JsValue, JsValue>;
}

/// Draws a payload into a mounted element.
pub trait PlotRenderer {
    fn render(&self, target: &HtmlElement, payload: &PlotPayload) -> RenderingResult<()>;
}

/// Renderer backed by the global Plotly.js object.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotlyRenderer;

impl PlotlyRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PlotRenderer for PlotlyRenderer {
    fn render(&self, target: &HtmlElement, payload: &PlotPayload) -> RenderingResult<()> {
        // Plotly wants plain JS objects, so go through JSON rather than serde-wasm-bindgen maps
        let data = to_js(&payload.data)?;
        let layout = to_js(&payload.layout)?;

        new_plot(target, &data, &layout)
            .map_err(|e| AppError::RenderingError(format!("Plotly.newPlot failed: {e:?}")))?;

        log_debug!(
            LogComponent::Infrastructure("Plotly"),
            "📊 Rendered {} trace(s) into #{}",
            payload.trace_count(),
            target.id()
        );
        Ok(())
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> RenderingResult<JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppError::RenderingError(format!("failed to serialize plot: {e}")))?;
    js_sys::JSON::parse(&json)
        .map_err(|e| AppError::RenderingError(format!("failed to build JS object: {e:?}")))
}
