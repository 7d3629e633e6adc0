//! Error types shared by the page and the service worker.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding the controller to the page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("element #{0} not found in document")]
    MissingElement(String),
    #[error("element #{0} is not a checkbox input")]
    NotACheckbox(String),
}

/// Failures from cache storage, the network, or the worker scope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("failed to fetch asset {0}")]
    AssetFetch(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("cache storage error: {0}")]
    Storage(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for CacheError {
    fn from(value: JsValue) -> Self {
        CacheError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<CacheError> for JsValue {
    fn from(err: CacheError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
