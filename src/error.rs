//! Error taxonomy for mounting and running the game.
//!
//! The session logic itself has almost nothing that can fail; errors come from
//! the page (missing or mistyped elements, rejected timer calls) and from
//! configuration.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("element `{selector}` is not a {expected}")]
    WrongElement {
        selector: String,
        expected: &'static str,
    },

    #[error("board selector `{0}` matched no cells")]
    EmptyBoard(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("speed `{0}` is not one of the configured presets")]
    UnknownSpeed(String),

    #[error("game is already mounted on this page")]
    AlreadyMounted,

    #[error("{op} failed: {message}")]
    Js { op: &'static str, message: String },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),
}

impl GameError {
    /// Wrap a JS exception raised by a browser call.
    pub fn js(op: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{err:?}"));
        GameError::Js { op, message }
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
