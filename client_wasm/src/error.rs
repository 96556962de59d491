use thiserror::Error;
use wasm_bindgen::JsValue;

/// Startup failures; there is no degraded mode, so any of these aborts the client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("window has no performance timer")]
    NoPerformance,

    #[error("canvas element #{0} not found")]
    CanvasNotFound(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2d rendering context unavailable")]
    NoContext2d,

    #[error("audio initialization failed: {0}")]
    Audio(String),

    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },

    #[error("javascript error: {0}")]
    Js(String),
}

/// Best-effort text for a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for ClientError {
    fn from(value: JsValue) -> Self {
        ClientError::Js(describe(&value))
    }
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
