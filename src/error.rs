// error.rs - Engine error types
//
// Only scene construction, config parsing and post-dispose queries can
// fail. Everything that happens per frame is infallible.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("{0}")]
    Unsupported(String),
    /// Malformed JSON or a value outside its valid range.
    #[error("config error: {0}")]
    Config(String),
    #[error("scene has been disposed")]
    Disposed,
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Text shown on the 3D loading screen when the scene cannot be built.
pub fn scene_error_message(err: &EngineError) -> String {
    format!("Error loading 3D Scene: {err}")
}
