//! Outgoing request descriptor.

use std::time::Duration;

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Method};
use serde::Serialize;
use url::Url;

use crate::Error;

/// A request before it is handed to the transport.
///
/// Interceptors receive the descriptor by value and may mutate it in place
/// (the token attacher only touches `Authorization`). The URL may be
/// absolute or relative to the client's base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    /// Overrides the client-wide timeout for this request only.
    pub timeout: Option<Duration>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(Method::PATCH, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Sets a header, replacing any existing value under the same name.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `value` as the JSON body and sets `Content-Type`.
    pub fn with_json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, Error> {
        let body = serde_json::to_vec(value).map_err(|e| {
            tracing::error!("Failed to serialize request body: {}", e);
            Error::request_setup(format!("invalid JSON body: {}", e))
        })?;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(Bytes::from(body));
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves the request URL against `base_url`.
    ///
    /// Only `scheme://...` URLs count as absolute and are used as-is. A
    /// leading `//` takes the base URL's scheme. Anything else, including
    /// paths like `orders:search`, is appended to the base with exactly one
    /// `/` between them. An empty base requires an absolute request URL.
    pub fn resolve_url(&self, base_url: &str) -> Result<Url, Error> {
        let target = if has_scheme(&self.url) {
            self.url.clone()
        } else if self.url.starts_with("//") {
            let scheme = Url::parse(base_url)
                .map(|base| base.scheme().to_string())
                .map_err(|_| {
                    Error::request_setup(format!(
                        "protocol-relative URL without a usable base URL: {}",
                        self.url
                    ))
                })?;
            format!("{}:{}", scheme, self.url)
        } else if base_url.is_empty() {
            return Err(Error::request_setup(format!(
                "relative URL without a base URL: {}",
                self.url
            )));
        } else if self.url.is_empty() {
            base_url.to_string()
        } else {
            format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                self.url.trim_start_matches('/')
            )
        };
        Url::parse(&target).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::request_setup(format!("invalid URL {}: {}", target, e))
        })
    }
}

/// True when `url` starts with `scheme://`, the scheme being a letter
/// followed by letters, digits, `+`, `-` or `.`.
fn has_scheme(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    rest.starts_with("//")
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_method_and_url() {
        let req = RequestDescriptor::delete("/items/1");
        assert_eq!(req.method, Method::DELETE);
        assert_eq!(req.url, "/items/1");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.timeout.is_none());
    }

    #[test]
    fn with_json_sets_body_and_content_type() {
        let req = RequestDescriptor::post("/items")
            .with_json(&serde_json::json!({"name": "widget"}))
            .unwrap();
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        assert_eq!(req.body.unwrap(), Bytes::from_static(br#"{"name":"widget"}"#));
    }

    #[test]
    fn with_header_replaces_existing_value() {
        let name = HeaderName::from_static("x-trace");
        let req = RequestDescriptor::get("/")
            .with_header(name.clone(), HeaderValue::from_static("a"))
            .with_header(name.clone(), HeaderValue::from_static("b"));
        assert_eq!(req.headers.get_all(&name).iter().count(), 1);
        assert_eq!(req.headers[&name], "b");
    }

    #[test]
    fn resolve_absolute_url_ignores_base() {
        let req = RequestDescriptor::get("https://other.example/path");
        let url = req.resolve_url("https://api.example").unwrap();
        assert_eq!(url.as_str(), "https://other.example/path");
    }

    #[test]
    fn resolve_joins_with_single_slash() {
        let req = RequestDescriptor::get("/users/me");
        let url = req.resolve_url("https://api.example/v1//").unwrap();
        assert_eq!(url.as_str(), "https://api.example/v1/users/me");

        let req = RequestDescriptor::get("users/me");
        let url = req.resolve_url("https://api.example/v1").unwrap();
        assert_eq!(url.as_str(), "https://api.example/v1/users/me");
    }

    #[test]
    fn resolve_colon_in_path_is_relative() {
        let req = RequestDescriptor::get("orders:search");
        let url = req.resolve_url("https://api.example/v1").unwrap();
        assert_eq!(url.as_str(), "https://api.example/v1/orders:search");

        let req = RequestDescriptor::get("v1:batchGet");
        let url = req.resolve_url("https://api.example/").unwrap();
        assert_eq!(url.as_str(), "https://api.example/v1:batchGet");
    }

    #[test]
    fn resolve_colon_path_without_base_fails() {
        let err = RequestDescriptor::get("items:42").resolve_url("").unwrap_err();
        assert!(matches!(err, Error::RequestSetup { .. }));
    }

    #[test]
    fn resolve_protocol_relative_takes_base_scheme() {
        let req = RequestDescriptor::get("//cdn.example/logo.png");
        let url = req.resolve_url("http://api.example/v1").unwrap();
        assert_eq!(url.as_str(), "http://cdn.example/logo.png");

        let err = req.resolve_url("").unwrap_err();
        assert!(matches!(err, Error::RequestSetup { .. }));
    }

    #[test]
    fn scheme_detection() {
        assert!(has_scheme("https://api.example"));
        assert!(has_scheme("svn+ssh://host/repo"));
        assert!(!has_scheme("orders:search"));
        assert!(!has_scheme("1http://x"));
        assert!(!has_scheme("/path"));
    }

    #[test]
    fn resolve_relative_without_base_fails() {
        let req = RequestDescriptor::get("/users/me");
        let err = req.resolve_url("").unwrap_err();
        assert!(matches!(err, Error::RequestSetup { .. }));
    }

    #[test]
    fn resolve_garbage_base_fails() {
        let req = RequestDescriptor::get("/users");
        let err = req.resolve_url("not a url").unwrap_err();
        assert!(matches!(err, Error::RequestSetup { .. }));
    }
}
