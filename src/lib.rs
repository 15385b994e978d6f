//! Mole Strike core crate.
//!
//! A whack-a-mole round for the browser: a target hops between the cells of a
//! fixed board and the player scores by clicking it before it moves on, until
//! the countdown runs out. The session logic (`session`) is plain Rust driven
//! through small collaborator traits; `board` binds those traits to the DOM.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod session;

pub use config::{GameConfig, Labels, SpeedPreset};
pub use error::GameError;
pub use session::{SessionController, SessionSettings, SessionSummary};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // A second init (e.g. tests re-running start) only reports that a logger exists.
    let _ = console_log::init_with_level(log::Level::Info);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Mount the game on the current page with the default configuration.
#[wasm_bindgen]
pub fn mount_game() -> Result<(), JsValue> {
    board::mount(GameConfig::default()).map_err(JsValue::from)
}

/// Mount the game with a JSON configuration; omitted fields keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn mount_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    board::mount(config).map_err(JsValue::from)
}
