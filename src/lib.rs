//! WebAssembly tic-tac-toe with move history and time travel.
//!
//! The game logic (`types`, `win`, `game`, `view`, `config`) is plain Rust
//! and builds on every target. The browser layer (`dom`, `logger` and the
//! wasm-bindgen exports) is only compiled for `wasm32`.
//!
//! Boards are flat `Vec`s in row-major layout: `cells[row * side + column]`.

pub mod config;
pub mod game;
pub mod types;
pub mod view;
pub mod win;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod logger;

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use std::str::FromStr;

    use log::LevelFilter;
    use wasm_bindgen::prelude::*;

    use crate::config::GameConfig;
    use crate::dom::{self, MountError};
    use crate::game::{Game, Intent};
    use crate::logger;

    fn config_from(options: JsValue) -> Result<GameConfig, MountError> {
        if options.is_undefined() || options.is_null() {
            return Ok(GameConfig::default());
        }
        serde_wasm_bindgen::from_value(options).map_err(|e| MountError::Config {
            message: e.to_string(),
        })
    }

    /// Runs once when the module is instantiated.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        logger::init(LevelFilter::Info);
    }

    /// Change the console log level (`"error"`, `"warn"`, `"info"`, `"debug"`, ...).
    #[wasm_bindgen(js_name = "setLogLevel")]
    pub fn wasm_set_log_level(level: &str) -> Result<(), JsValue> {
        let filter = LevelFilter::from_str(level)
            .map_err(|_| JsValue::from_str(&format!("unknown log level `{}`", level)))?;
        log::set_max_level(filter);
        Ok(())
    }

    /// Mount a game into the element with id `elementId`.
    ///
    /// `options` is optional: `{ numSquaresPerSide: number | string }`.
    #[wasm_bindgen(js_name = "mount")]
    pub fn wasm_mount(element_id: &str, options: JsValue) -> Result<(), JsValue> {
        let config = config_from(options)?;
        dom::mount_by_id(element_id, Game::new(&config))?;
        Ok(())
    }

    /// Game handle for hosts that render the view themselves.
    #[wasm_bindgen]
    pub struct WasmGame(Game);

    #[wasm_bindgen]
    impl WasmGame {
        #[wasm_bindgen(constructor)]
        pub fn new(options: JsValue) -> Result<WasmGame, JsValue> {
            Ok(Self(Game::new(&config_from(options)?)))
        }

        /// Returns `true` if the move was accepted.
        #[wasm_bindgen(js_name = "handleMove")]
        pub fn handle_move(&mut self, cell: usize) -> bool {
            self.0.handle_move(cell)
        }

        #[wasm_bindgen(js_name = "jumpTo")]
        pub fn jump_to(&mut self, step: usize) -> bool {
            self.0.jump_to(step)
        }

        #[wasm_bindgen(js_name = "toggleMoveOrder")]
        pub fn toggle_move_order(&mut self) {
            self.0.apply(Intent::ToggleOrder);
        }

        /// Apply a serialized intent: `{ move: 4 }`, `{ jump: 1 }` or `"toggleOrder"`.
        #[wasm_bindgen]
        pub fn dispatch(&mut self, intent: JsValue) -> Result<bool, JsValue> {
            let intent: Intent = serde_wasm_bindgen::from_value(intent)?;
            Ok(self.0.apply(intent))
        }

        /// The full render projection as a plain JS object.
        #[wasm_bindgen]
        pub fn view(&self) -> Result<JsValue, JsValue> {
            Ok(serde_wasm_bindgen::to_value(&self.0.view())?)
        }

        #[wasm_bindgen]
        pub fn status(&self) -> String {
            self.0.status().to_string()
        }

        #[wasm_bindgen(js_name = "activeStep")]
        pub fn active_step(&self) -> usize {
            self.0.active_step()
        }

        #[wasm_bindgen(js_name = "historyLength")]
        pub fn history_length(&self) -> usize {
            self.0.history().len()
        }

        #[wasm_bindgen(js_name = "sideLength")]
        pub fn side_length(&self) -> usize {
            self.0.side()
        }
    }
}
