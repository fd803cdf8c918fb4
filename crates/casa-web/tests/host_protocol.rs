//! A scripted host session: JSON events in, JSON effects out.

use casa_web::RunnerCore;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn effects(core: &mut RunnerCore) -> Vec<Value> {
    match serde_json::from_str(&core.take_effects_json()).unwrap() {
        Value::Array(items) => items,
        other => panic!("expected an array, got {other}"),
    }
}

fn kinds(effects: &[Value]) -> Vec<&str> {
    effects.iter().filter_map(|e| e["kind"].as_str()).collect()
}

fn frame(core: &mut RunnerCore, events: &[&str], dt_ms: f64) -> Vec<Value> {
    for event in events {
        assert!(core.push_encoded_input(event), "rejected: {event}");
    }
    core.advance_time_ms(dt_ms);
    core.step();
    effects(core)
}

#[test]
fn counters_animate_after_stats_scroll_into_view() {
    let mut core = RunnerCore::new(1280.0, 1000.0, "/casa-do-brazil-website/").unwrap();
    core.init();
    let first = effects(&mut core);
    assert_eq!(kinds(&first)[..2], ["render", "measureLayout"]);

    frame(
        &mut core,
        &[r#"{"kind":"layout","boxes":[{"id":"about-stats","top":1500,"height":200}]}"#],
        16.0,
    );
    frame(&mut core, &[r#"{"kind":"scroll","y":720}"#], 16.0);

    let mut texts = Vec::new();
    for _ in 0..200 {
        let out = frame(&mut core, &[], 16.0);
        texts.extend(out.into_iter().filter(|e| e["kind"] == "text"));
    }
    let last_first_stat = texts
        .iter()
        .rev()
        .find(|e| e["target"] == "stat-0")
        .expect("stat-0 updated");
    assert_eq!(last_first_stat["text"], "2001");
    assert!(core.take_logs().iter().any(|l| l == "stats counters started"));
}

#[test]
fn menu_link_pushes_history_and_renders_menu() {
    let mut core = RunnerCore::new(390.0, 844.0, "/casa-do-brazil-website/").unwrap();
    core.init();
    let _ = effects(&mut core);

    let out = frame(
        &mut core,
        &[r#"{"kind":"action","name":"navigate","value":"/menu"}"#],
        16.0,
    );
    assert_eq!(core.route(), "menu");
    let render = out.iter().find(|e| e["kind"] == "render").expect("render");
    assert!(render["html"].as_str().unwrap().contains("id=\"menu-page\""));
    assert!(
        out.iter()
            .any(|e| e["kind"] == "navigate" && e["path"] == "/casa-do-brazil-website/menu")
    );

    // Back button.
    frame(
        &mut core,
        &[r#"{"kind":"navigate","path":"/casa-do-brazil-website/"}"#],
        16.0,
    );
    assert_eq!(core.route(), "home");
}

#[test]
fn language_switch_updates_document() {
    let mut core = RunnerCore::new(1280.0, 800.0, "/").unwrap();
    core.init();
    let _ = effects(&mut core);
    let out = frame(
        &mut core,
        &[r#"{"kind":"action","name":"lang","value":"en"}"#],
        16.0,
    );
    let docs: Vec<&Value> = out.iter().filter(|e| e["kind"] == "document").collect();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["lang"], "en");
    assert_eq!(docs[0]["dir"], "ltr");
    assert!(kinds(&out).contains(&"relayout"));
}
