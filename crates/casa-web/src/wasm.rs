#![forbid(unsafe_code)]

//! `wasm-bindgen` exports for the SiteRunner.
//!
//! This module wraps [`super::runner_core::RunnerCore`] with JS-friendly types.
//! Only compiled on `wasm32` targets.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::runner_core::RunnerCore;

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = if let Some(loc) = info.location() {
                format!(
                    "panic at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                )
            } else {
                format!("panic: {info}")
            };
            console_error(&msg);
        }));
    });
}

/// Browser runner for the site.
///
/// Host-driven: the page script forwards events as JSON, calls `step` from
/// `requestAnimationFrame` and applies the effects from `takeEffects`.
#[wasm_bindgen]
pub struct SiteRunner {
    inner: RunnerCore,
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    install_panic_hook();
}

#[wasm_bindgen]
impl SiteRunner {
    /// Create a runner for the viewport size and `location.pathname`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, location: &str) -> Result<SiteRunner, JsError> {
        install_panic_hook();
        let inner = RunnerCore::new(width, height, location)
            .map_err(|err| JsError::new(&err.to_string()))?;
        Ok(Self { inner })
    }

    /// Initialize the model. Call exactly once.
    pub fn init(&mut self) {
        self.inner.init();
    }

    /// Advance the clock by `dt_ms` milliseconds.
    #[wasm_bindgen(js_name = advanceTime)]
    pub fn advance_time(&mut self, dt_ms: f64) {
        self.inner.advance_time_ms(dt_ms);
    }

    /// Set the clock to a `requestAnimationFrame` timestamp.
    #[wasm_bindgen(js_name = setTime)]
    pub fn set_time(&mut self, ts_ms: f64) {
        self.inner.set_time_ms(ts_ms);
    }

    /// Set the clock from `performance.now()`.
    #[wasm_bindgen(js_name = syncClock)]
    pub fn sync_clock(&mut self) {
        self.inner.sync_clock();
    }

    /// Parse a JSON-encoded host event and queue it.
    /// Returns `true` if accepted, `false` if unsupported/malformed.
    #[wasm_bindgen(js_name = pushEvent)]
    pub fn push_event(&mut self, json: &str) -> bool {
        self.inner.push_encoded_input(json)
    }

    /// Queue a viewport resize, processed on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.inner.resize(width, height);
    }

    /// Process queued events and advance motion.
    /// Returns `{ events_processed, reveals_fired, tick_fired, dirty, animating }`.
    pub fn step(&mut self) -> JsValue {
        let result = self.inner.step();
        let obj = Object::new();
        let _ = Reflect::set(
            &obj,
            &"events_processed".into(),
            &result.events_processed.into(),
        );
        let _ = Reflect::set(&obj, &"reveals_fired".into(), &result.reveals_fired.into());
        let _ = Reflect::set(&obj, &"tick_fired".into(), &result.tick_fired.into());
        let _ = Reflect::set(&obj, &"dirty".into(), &result.dirty.into());
        let _ = Reflect::set(&obj, &"animating".into(), &result.animating.into());
        obj.into()
    }

    /// Drain effects as a JSON array of `{ kind, ... }` objects.
    #[wasm_bindgen(js_name = takeEffects)]
    pub fn take_effects(&mut self) -> String {
        self.inner.take_effects_json()
    }

    /// Drain accumulated log lines. Returns `Array<string>`.
    #[wasm_bindgen(js_name = takeLogs)]
    pub fn take_logs(&mut self) -> Array {
        let logs = self.inner.take_logs();
        let arr = Array::new();
        for log in logs {
            arr.push(&JsValue::from_str(&log));
        }
        arr
    }

    /// Number of renders so far.
    #[wasm_bindgen(js_name = frameIdx)]
    pub fn frame_idx(&self) -> u64 {
        self.inner.frame_idx()
    }

    /// Current language code.
    pub fn language(&self) -> String {
        self.inner.language().to_owned()
    }

    /// Current route name.
    pub fn route(&self) -> String {
        self.inner.route().to_owned()
    }
}
