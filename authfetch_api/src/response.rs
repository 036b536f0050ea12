//! Received response descriptor.

use std::borrow::Cow;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// A successful response. Read-only once received.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseDescriptor {
    /// Final URL after redirects.
    pub url: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ResponseDescriptor {
    /// Body decoded as UTF-8, lossily.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Shortens a body for logging.
pub(crate) fn truncate_body(body: &str) -> Cow<'_, str> {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return Cow::Borrowed(body);
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}...[truncated]", &body[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &'static str) -> ResponseDescriptor {
        ResponseDescriptor {
            url: "https://api.example/items".to_string(),
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn json_decodes_body() {
        let resp = response(r#"{"id":7}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn json_rejects_malformed_body() {
        let resp = response("{not valid json}");
        assert!(resp.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn text_returns_body() {
        assert_eq!(response("hello").text(), "hello");
    }

    #[test]
    fn truncate_short_body_untouched() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "가".repeat(1000);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() < body.len());
    }
}
