use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("missing element `{0}`")]
    Missing(&'static str),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
