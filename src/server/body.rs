//! Request body decoding.
//!
//! Only JSON objects and `application/x-www-form-urlencoded` bodies are
//! understood. Anything else decodes to "no body" and is left to the
//! handlers' validation.

use crate::catalog_store::Fields;
use axum::http::{header, HeaderMap};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("JSON body must be an object")]
    NotAnObject,
    #[error("Body is not valid UTF-8")]
    NotUtf8,
    #[error("Invalid percent-encoding in form body")]
    PercentEncoding,
}

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let content_type = match headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        Some(x) => x,
        None => return BodyKind::Other,
    };
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match media_type.as_str() {
        "application/json" => BodyKind::Json,
        "application/x-www-form-urlencoded" => BodyKind::Form,
        _ => BodyKind::Other,
    }
}

pub fn decode_json(bytes: &[u8]) -> Result<Fields, BodyError> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => Ok(map),
        _ => Err(BodyError::NotAnObject),
    }
}

fn decode_form_component(raw: &str) -> Result<String, BodyError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| BodyError::PercentEncoding)
}

/// `a=1&b=two+words` style bodies. Every value is kept as a string; a pair
/// without `=` gets an empty value and a repeated key keeps its last value.
pub fn decode_form(bytes: &[u8]) -> Result<Fields, BodyError> {
    let text = std::str::from_utf8(bytes).map_err(|_| BodyError::NotUtf8)?;
    let mut fields = Fields::new();
    for pair in text.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        fields.insert(
            decode_form_component(key)?,
            Value::String(decode_form_component(value)?),
        );
    }
    Ok(fields)
}

/// Decodes the body according to its `Content-Type`. Undecodable bodies are
/// logged and treated as absent.
pub fn decode_body(headers: &HeaderMap, bytes: &[u8]) -> Option<Fields> {
    if bytes.is_empty() {
        return None;
    }
    let decoded = match body_kind(headers) {
        BodyKind::Json => decode_json(bytes),
        BodyKind::Form => decode_form(bytes),
        BodyKind::Other => return None,
    };
    match decoded {
        Ok(fields) => Some(fields),
        Err(err) => {
            warn!("Ignoring request body: {}", err);
            None
        }
    }
}
