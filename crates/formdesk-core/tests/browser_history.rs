#![cfg(target_arch = "wasm32")]

use formdesk_core::{BrowserHistory, HistoryBackend, Navigator, RouteDefinition, RouteTable};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn push_updates_location_and_position() {
    let mut history = BrowserHistory::new("/").unwrap();
    let start = history.position();

    history.push("/forms/intake?draft=1").unwrap();
    assert_eq!(history.location(), "/forms/intake?draft=1");
    assert_eq!(history.position(), start + 1);

    history.replace("/home").unwrap();
    assert_eq!(history.location(), "/home");
    assert_eq!(history.position(), start + 1);
}

#[wasm_bindgen_test]
fn failed_push_keeps_position() {
    let mut history = BrowserHistory::new("/").unwrap();
    history.push("/home").unwrap();
    let position = history.position();

    // pushState rejects URLs on another origin.
    assert!(history.push("//other.invalid/home").is_err());
    assert_eq!(history.position(), position);
    assert_eq!(history.location(), "/home");

    history.push("/forms/intake").unwrap();
    assert_eq!(history.position(), position + 1);
}

#[wasm_bindgen_test]
fn navigator_over_browser_history() {
    let table = RouteTable::new(vec![
        RouteDefinition::new("/", "Login", ()).unwrap(),
        RouteDefinition::new("/forms/:formName", "FormQuery", ()).unwrap(),
    ])
    .unwrap();
    let mut nav = Navigator::new(table, BrowserHistory::new("/").unwrap()).unwrap();

    let state = nav.push("/forms/audit").unwrap();
    assert_eq!(state.param("formName"), Some("audit"));
    assert_eq!(nav.history().location(), "/forms/audit");

    // Browser traversal settles through popstate, not synchronously.
    assert_eq!(nav.back().unwrap(), None);
}
