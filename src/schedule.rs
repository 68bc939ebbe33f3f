use wasm_bindgen::JsValue;

/// Tick interval when falling back to a plain timer, roughly 60 fps.
const FALLBACK_INTERVAL_MS: i32 = 1000 / 60;

/// How render-loop callbacks get queued onto the event loop.
///
/// The strategy is probed once at startup rather than re-detected per
/// frame; hosts without `requestAnimationFrame` get a plain timeout
/// tick instead. This only provides "call me back next frame"
/// semantics; the loop itself belongs to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameScheduler {
    AnimationFrame,
    Timer,
}

impl FrameScheduler {
    /// Pick a strategy based on what the window exposes.
    pub fn detect() -> Self {
        let has_raf = web_sys::window()
            .map(|w| {
                js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("requestAnimationFrame"))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if has_raf {
            Self::AnimationFrame
        } else {
            Self::Timer
        }
    }

    /// Queue `callback` for the next frame.
    pub fn schedule(&self, callback: &js_sys::Function) {
        let Some(window) = web_sys::window() else { return };
        let result = match self {
            Self::AnimationFrame => window.request_animation_frame(callback).map(|_| ()),
            Self::Timer => window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback,
                    FALLBACK_INTERVAL_MS,
                )
                .map(|_| ()),
        };
        if let Err(err) = result {
            log::warn!("failed to schedule frame callback: {err:?}");
        }
    }
}
