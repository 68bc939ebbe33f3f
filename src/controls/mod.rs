//! Wires a synth settings panel: selects and range sliders inside a
//! container get change handlers that feed a debounced replay callback,
//! and every slider gains a paired text field for direct numeric entry.

pub mod debounce;
pub mod range;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use debounce::Debounce;
use range::RangeSpec;
use std::cell::Cell;
use std::rc::Rc;

/// Attach change handling to every control inside `container`.
///
/// Listeners are leaked with `Closure::forget` since they live as long
/// as the DOM elements they are bound to.
pub fn bind(container: &Element, play: js_sys::Function, auto_play: bool) -> Result<(), JsValue> {
    let replay = Debounce::new(play);
    bind_selects(container, &replay, auto_play)?;
    bind_ranges(container, &replay, auto_play)?;
    Ok(())
}

fn bind_selects(container: &Element, replay: &Debounce, auto_play: bool) -> Result<(), JsValue> {
    let selects = container.query_selector_all("select")?;
    for i in 0..selects.length() {
        let Some(node) = selects.item(i) else { continue };
        let replay = replay.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            if auto_play {
                replay.trigger();
            }
        });
        node.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
    }
    Ok(())
}

fn bind_ranges(container: &Element, replay: &Debounce, auto_play: bool) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let sliders = container.query_selector_all("input[type=range]")?;
    for i in 0..sliders.length() {
        let Some(node) = sliders.item(i) else { continue };
        let Ok(slider) = node.dyn_into::<HtmlInputElement>() else { continue };
        bind_range(&document, slider, replay.clone(), auto_play)?;
    }
    Ok(())
}

fn bind_range(
    document: &Document,
    slider: HtmlInputElement,
    replay: Debounce,
    auto_play: bool,
) -> Result<(), JsValue> {
    let spec = RangeSpec::from_input(&slider);
    let last_display = Rc::new(Cell::new(spec.display_value(slider.value_as_number())));
    log::debug!("bound range control {spec:?}, initial value {}", last_display.get());

    // Paired text field for typing an exact value, inserted right after
    // the slider.
    let field: HtmlInputElement = document
        .create_element("input")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("created element is not an input"))?;
    field.set_type("text");
    field.set_class_name("form-control");
    field.set_value(&range::format_display(last_display.get()));
    slider.after_with_node_1(&field)?;

    // Slider -> text field, then the debounced replay.
    {
        let slider_in = slider.clone();
        let field = field.clone();
        let last_display = last_display.clone();
        let on_slider_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let display = spec.display_value(slider_in.value_as_number());
            last_display.set(display);
            field.set_value(&range::format_display(display));
            if auto_play {
                replay.trigger();
            }
        });
        slider.add_event_listener_with_callback("change", on_slider_change.as_ref().unchecked_ref())?;
        on_slider_change.forget();
    }

    // Text field -> slider. Unparsable input falls back to the last valid
    // display value, so the slider lands back where it was. Dispatching a
    // real change event on the slider runs the handler above (and any
    // host listeners) for the programmatic move too.
    {
        let field_ref = field.clone();
        let on_field_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let display = range::parse_field_value(&field_ref.value(), last_display.get());
            slider.set_value_as_number(spec.raw_value(display));
            if let Ok(ev) = web_sys::Event::new("change") {
                let _ = slider.dispatch_event(&ev);
            }
        });
        field.add_event_listener_with_callback("change", on_field_change.as_ref().unchecked_ref())?;
        on_field_change.forget();
    }

    Ok(())
}
