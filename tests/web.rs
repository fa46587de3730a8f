#![cfg(target_arch = "wasm32")]

use tictactoe_wasm::dom::{self, MountError};
use tictactoe_wasm::game::Game;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container(id: &str) -> Element {
    let doc = dom::document().unwrap();
    let el = doc.create_element("div").unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn status(root: &Element) -> String {
    root.query_selector(".status")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn jump_labels(root: &Element) -> Vec<String> {
    let buttons = root.query_selector_all("li > button").unwrap();
    (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .filter_map(|n| n.text_content())
        .collect()
}

#[wasm_bindgen_test]
fn test_mount_renders_empty_board() {
    let root = container("mount-empty");
    dom::mount_by_id("mount-empty", Game::default()).unwrap();

    assert_eq!(root.query_selector_all(".board-row").unwrap().length(), 3);
    assert_eq!(root.query_selector_all(".square").unwrap().length(), 9);
    assert_eq!(status(&root), "Next player: X");
    assert_eq!(jump_labels(&root), vec!["Go to game start"]);
}

#[wasm_bindgen_test]
fn test_missing_element() {
    let err = dom::mount_by_id("no-such-element", Game::default()).err();
    assert!(matches!(err, Some(MountError::MissingElement { .. })));
}

#[wasm_bindgen_test]
fn test_clicks_play_and_highlight_win() {
    let root = container("mount-win");
    dom::mount_by_id("mount-win", Game::default()).unwrap();

    for cell in [0, 4, 1, 5, 2] {
        click(&root, &format!("button[data-intent='move'][data-value='{}']", cell));
    }
    assert_eq!(status(&root), "Winner X");
    assert_eq!(root.query_selector_all(".squareWinner").unwrap().length(), 3);

    // Further clicks are ignored.
    click(&root, "button[data-intent='move'][data-value='8']");
    assert_eq!(root.query_selector_all("li").unwrap().length(), 6);
}

#[wasm_bindgen_test]
fn test_toggle_and_jump() {
    let root = container("mount-toggle");
    let mounted = dom::mount_by_id("mount-toggle", Game::default()).unwrap();

    for cell in [4, 0] {
        click(&root, &format!("button[data-intent='move'][data-value='{}']", cell));
    }
    click(&root, "input[type='checkbox']");
    assert!(mounted.game().borrow().is_reversed());
    assert_eq!(
        jump_labels(&root),
        vec!["Go to move #2", "Go to move #1", "Go to game start"]
    );
    // Only the item order flips; list numbering stays ascending.
    let list = root.query_selector("ol").unwrap().unwrap();
    assert!(!list.has_attribute("reversed"));

    click(&root, "button[data-intent='jump'][data-value='1']");
    assert_eq!(mounted.game().borrow().active_step(), 1);
    assert_eq!(status(&root), "Next player: O");
}
