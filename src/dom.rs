//! DOM renderer for the browser build.
//!
//! The game is mounted into one container element. Every render rebuilds the
//! container's children from a fresh [`GameView`]. Clicks and checkbox
//! changes are handled by two delegated listeners on the container that read
//! `data-intent` / `data-value` attributes, so no per-element closures exist.

use crate::game::{Game, Intent};
use crate::view::{BoardView, GameView, MoveView, ROW_CLASS};
use derive_more::{Display, Error};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

const INTENT_ATTR: &str = "data-intent";
const VALUE_ATTR: &str = "data-value";

/// Failure at the host page boundary.
#[derive(Debug, Clone, Display, Error)]
pub enum MountError {
    #[display("no document available")]
    NoDocument,
    #[display("no element with id `{id}`")]
    MissingElement { id: String },
    #[display("invalid options: {message}")]
    Config { message: String },
    #[display("DOM error: {message}")]
    Dom { message: String },
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        MountError::Dom { message }
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub fn document() -> Result<Document, MountError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(MountError::NoDocument)
}

/// A game attached to a container element.
pub struct Mounted {
    game: Rc<RefCell<Game>>,
    root: Element,
    document: Document,
}

/// Mount `game` into the element with id `element_id`.
pub fn mount_by_id(element_id: &str, game: Game) -> Result<Rc<Mounted>, MountError> {
    let document = document()?;
    let root = document
        .get_element_by_id(element_id)
        .ok_or_else(|| MountError::MissingElement {
            id: element_id.to_string(),
        })?;
    mount(document, root, game)
}

/// Mount `game` into `root` and render it once.
///
/// The listeners live as long as the page; the returned handle may be
/// dropped without unmounting.
pub fn mount(document: Document, root: Element, game: Game) -> Result<Rc<Mounted>, MountError> {
    let mounted = Rc::new(Mounted {
        game: Rc::new(RefCell::new(game)),
        root,
        document,
    });

    for event in ["click", "change"] {
        let handle = Rc::clone(&mounted);
        let listener = Closure::<dyn FnMut(Event)>::new(move |e: Event| handle.on_event(&e));
        mounted
            .root
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }

    mounted.render()?;
    log::info!(
        "mounted {0}x{0} game into #{1}",
        mounted.game.borrow().side(),
        mounted.root.id()
    );
    Ok(mounted)
}

impl Mounted {
    pub fn game(&self) -> &Rc<RefCell<Game>> {
        &self.game
    }

    /// Apply an intent and re-render if it changed anything.
    pub fn dispatch(&self, intent: Intent) -> bool {
        let changed = self.game.borrow_mut().apply(intent);
        if changed {
            if let Err(e) = self.render() {
                log::error!("render failed: {}", e);
            }
        }
        changed
    }

    fn on_event(&self, event: &Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(source)) = target.closest(&format!("[{}]", INTENT_ATTR)) else {
            return;
        };
        // The checkbox reports through "change"; buttons through "click".
        let is_checkbox = source.get_attribute("type").as_deref() == Some("checkbox");
        if is_checkbox != (event.type_() == "change") {
            return;
        }
        let Some(kind) = source.get_attribute(INTENT_ATTR) else {
            return;
        };
        let value = source.get_attribute(VALUE_ATTR);
        match Intent::from_dataset(&kind, value.as_deref()) {
            Some(intent) => {
                self.dispatch(intent);
            }
            None => log::warn!("unrecognized intent `{}` ({:?})", kind, value),
        }
    }

    pub fn render(&self) -> Result<(), MountError> {
        let view = self.game.borrow().view();
        let tree = self.game_element(&view)?;
        self.root.set_inner_html("");
        self.root.append_child(&tree)?;
        Ok(())
    }

    fn element(&self, tag: &str, class_name: &str) -> Result<Element, MountError> {
        let el = self.document.create_element(tag)?;
        if !class_name.is_empty() {
            el.set_class_name(class_name);
        }
        Ok(el)
    }

    fn game_element(&self, view: &GameView) -> Result<Element, MountError> {
        let game = self.element("div", "game")?;

        let board = self.element("div", "game-board")?;
        board.append_child(&self.board_element(&view.board)?)?;
        game.append_child(&board)?;

        let info = self.element("div", "game-info")?;
        let status = self.element("div", "status")?;
        status.set_text_content(Some(&view.status));
        info.append_child(&status)?;
        info.append_child(&self.toggle_element(view.reversed)?)?;

        let list = self.element("ol", "")?;
        for mv in &view.moves {
            list.append_child(&self.move_element(mv)?)?;
        }
        info.append_child(&list)?;
        game.append_child(&info)?;

        Ok(game)
    }

    fn board_element(&self, board: &BoardView) -> Result<Element, MountError> {
        let container = self.element("div", "")?;
        for row in &board.rows {
            let row_el = self.element("div", ROW_CLASS)?;
            for square in row {
                let button = self.element("button", square.class_name)?;
                button.set_attribute(INTENT_ATTR, "move")?;
                button.set_attribute(VALUE_ATTR, &square.index.to_string())?;
                button.set_text_content(Some(&square.label));
                row_el.append_child(&button)?;
            }
            container.append_child(&row_el)?;
        }
        Ok(container)
    }

    fn toggle_element(&self, reversed: bool) -> Result<Element, MountError> {
        let wrapper = self.element("div", "")?;
        let input = self.element("input", "")?;
        input.set_attribute("type", "checkbox")?;
        input.set_attribute(INTENT_ATTR, "toggle-order")?;
        if reversed {
            input.set_attribute("checked", "")?;
        }
        wrapper.append_child(&input)?;
        wrapper.append_child(&self.document.create_text_node("Sort in descending order"))?;
        Ok(wrapper)
    }

    fn move_element(&self, mv: &MoveView) -> Result<Element, MountError> {
        let item = self.element("li", "")?;
        let button = self.element("button", "")?;
        button.set_attribute(INTENT_ATTR, "jump")?;
        button.set_attribute(VALUE_ATTR, &mv.step.to_string())?;
        let weight = if mv.active { "bold" } else { "normal" };
        button.set_attribute("style", &format!("font-weight: {}", weight))?;
        button.set_text_content(Some(&mv.label));
        item.append_child(&button)?;
        if let Some(location) = &mv.location {
            let text = format!(" Move location: {}", location);
            item.append_child(&self.document.create_text_node(&text))?;
        }
        Ok(item)
    }
}
