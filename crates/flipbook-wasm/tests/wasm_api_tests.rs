#![cfg(target_arch = "wasm32")]
use flipbook_wasm::{abi_version, FlipBook};
use serde_json::json;
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn config_json(value: serde_json::Value) -> JsValue {
    swb::to_value(&value).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let book = FlipBook::new(6, JsValue::UNDEFINED, JsValue::NULL);
    assert!(book.is_ok());
}

#[wasm_bindgen_test]
fn malformed_config_is_a_construction_error() {
    let bad = config_json(json!({ "initial_active_page": "nope" }));
    assert!(FlipBook::new(6, bad, JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn padded_book_turns_and_reports_results() {
    let mut book = FlipBook::new(6, JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap();
    assert_eq!(book.active_pages(), vec![1, 2]);

    let result = book.turn_forward();
    assert!(!result.is_undefined());
    assert_eq!(book.active_pages(), vec![3, 4]);

    // Refused turns come back undefined.
    let mut book = FlipBook::new(0, JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap();
    assert!(book.turn_forward().is_undefined());
}

#[wasm_bindgen_test]
fn closable_book_walks_cover_to_cover() {
    let cfg = config_json(json!({ "can_close": true }));
    let mut book = FlipBook::new(6, cfg, JsValue::UNDEFINED).unwrap();
    assert!(book.is_first_page());

    while !book.turn_forward().is_undefined() {}
    assert!(book.is_last_page());
    assert_eq!(book.active_pages(), vec![5]);
}

#[wasm_bindgen_test]
fn arrow_keys_invert_without_smooth_3d() {
    let caps = config_json(json!({ "smooth_3d": false, "preserve_3d": false }));
    let mut book = FlipBook::new(6, JsValue::UNDEFINED, caps).unwrap();

    // On a flat renderer the left arrow moves forward.
    assert!(!book.key_down("ArrowLeft").is_undefined());
    assert_eq!(book.active_pages(), vec![3, 4]);
    assert!(!book.key_down("ArrowRight").is_undefined());
    assert_eq!(book.active_pages(), vec![1, 2]);
    assert!(book.key_down("Enter").is_undefined());
}

#[wasm_bindgen_test]
fn clicks_map_to_sides_and_covers_are_inert() {
    let mut book = FlipBook::new(6, JsValue::UNDEFINED, JsValue::UNDEFINED).unwrap();
    assert!(book.page_clicked(0).is_undefined());
    assert!(!book.page_clicked(2).is_undefined());
    assert_eq!(book.active_pages(), vec![3, 4]);
    assert!(!book.page_clicked(3).is_undefined());
    assert_eq!(book.active_pages(), vec![1, 2]);
}

#[wasm_bindgen_test]
fn callout_ticks_until_a_turn_cancels_it() {
    let cfg = config_json(json!({ "initial_call": true }));
    let mut book = FlipBook::new(6, cfg, JsValue::UNDEFINED).unwrap();
    assert_eq!(book.callout_tick(true), Some(2));
    assert_eq!(book.callout_tick(false), Some(2));

    book.turn_forward();
    assert_eq!(book.callout_tick(true), None);
}
