//! Browser-side smoke test for the exported runner.
#![cfg(target_arch = "wasm32")]

use casa_web::SiteRunner;
use wasm_bindgen_test::wasm_bindgen_test;

#[wasm_bindgen_test]
fn runner_renders_and_switches_language() {
    let Ok(mut runner) = SiteRunner::new(1280.0, 800.0, "/") else {
        panic!("runner failed to start");
    };
    runner.init();
    assert!(runner.take_effects().starts_with(r#"[{"kind":"render""#));
    assert!(runner.push_event(r#"{"kind":"action","name":"lang","value":"en"}"#));
    runner.advance_time(16.0);
    let _ = runner.step();
    assert_eq!(runner.language(), "en");
    assert!(runner.take_effects().contains(r#""kind":"document""#));
}
