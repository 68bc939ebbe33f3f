pub mod audio;
pub mod canvas;
pub mod controls;
pub mod schedule;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AnalyserNode, Element, HtmlCanvasElement};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Wire up every `select` and `input[type=range]` inside `container`.
///
/// Each range slider gets a paired numeric text field inserted after it,
/// kept in two-way sync. When `auto_play` is true, any control change
/// invokes `play` after a 200ms quiet period, so dragging a slider
/// replays the sound once rather than on every tick.
#[wasm_bindgen]
pub fn bind_controls(container: Element, play: js_sys::Function, auto_play: bool) -> Result<(), JsValue> {
    controls::bind(&container, play, auto_play)
}

/// Draw one frame of analyser output: a filled spectrum plot on
/// `spectrum` and a stroked waveform on `waveform`. The caller drives
/// the cadence (see [`schedule::FrameScheduler`]); each call is a
/// single full redraw of both canvases.
#[wasm_bindgen]
pub fn render_analysis(
    spectrum: HtmlCanvasElement,
    waveform: HtmlCanvasElement,
    analyser: AnalyserNode,
) -> Result<(), JsValue> {
    let spectrum_ctx = context_2d(&spectrum)?;
    let waveform_ctx = context_2d(&waveform)?;
    canvas::render_analysis(&spectrum_ctx, &waveform_ctx, &analyser);
    Ok(())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<web_sys::CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("unexpected context type"))
}
