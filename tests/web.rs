// Browser smoke tests; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn classic_mode_boots_with_canvas() {
    canvas_platformer::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("game").is_some());
}

#[wasm_bindgen_test]
fn level_select_builds_menu_and_starts_level() {
    canvas_platformer::start_level_select().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    let menu = doc.get_element_by_id("level-select").unwrap();
    assert_eq!(menu.query_selector_all("button").unwrap().length(), 5);
    canvas_platformer::start_level(2).unwrap();
    assert!(canvas_platformer::start_level(9).is_err());
}
