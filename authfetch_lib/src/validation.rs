use authfetch_api::header::{HeaderName, HeaderValue, AUTHORIZATION};
use authfetch_api::HeaderMap;

use crate::error::AuthFetchError;

pub const MAX_HEADER_VALUE_LENGTH: usize = 8192;

/// Parses a `Name: value` header argument.
pub fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), AuthFetchError> {
    let (name, value) = raw.split_once(':').ok_or_else(|| {
        AuthFetchError::InvalidInput(format!("header must look like 'Name: value', got '{}'", raw))
    })?;
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() {
        return Err(AuthFetchError::InvalidInput(format!(
            "header name is empty in '{}'",
            raw
        )));
    }
    if value.len() > MAX_HEADER_VALUE_LENGTH {
        return Err(AuthFetchError::InvalidInput(format!(
            "header '{}' value exceeds {} bytes",
            name, MAX_HEADER_VALUE_LENGTH
        )));
    }
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| AuthFetchError::InvalidInput(format!("invalid header name '{}'", name)))?;
    let mut header_value = HeaderValue::from_str(value).map_err(|_| {
        AuthFetchError::InvalidInput(format!("invalid value for header '{}'", name))
    })?;
    if header_name == AUTHORIZATION {
        header_value.set_sensitive(true);
    }
    Ok((header_name, header_value))
}

/// Parses every header argument into one map. Later values for the same
/// name are appended, as on the wire.
pub fn parse_headers<S: AsRef<str>>(raw: &[S]) -> Result<HeaderMap, AuthFetchError> {
    let mut headers = HeaderMap::new();
    for item in raw {
        let (name, value) = parse_header(item.as_ref())?;
        headers.append(name, value);
    }
    Ok(headers)
}

/// Parses a request body given on the command line as JSON.
pub fn parse_json_body(raw: &str) -> Result<serde_json::Value, AuthFetchError> {
    serde_json::from_str(raw)
        .map_err(|e| AuthFetchError::InvalidInput(format!("request body is not valid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_basic() {
        let (name, value) = parse_header("X-Trace-Id: abc").unwrap();
        assert_eq!(name.as_str(), "x-trace-id");
        assert_eq!(value, "abc");
    }

    #[test]
    fn header_value_may_contain_colons() {
        let (_, value) = parse_header("Referer: https://app.example:8443/x").unwrap();
        assert_eq!(value, "https://app.example:8443/x");
    }

    #[test]
    fn authorization_header_is_sensitive() {
        let (_, value) = parse_header("Authorization: Basic Zm9v").unwrap();
        assert!(value.is_sensitive());
    }

    #[test]
    fn header_missing_colon() {
        assert!(parse_header("X-Trace-Id abc").is_err());
    }

    #[test]
    fn header_empty_name() {
        assert!(parse_header(": abc").is_err());
    }

    #[test]
    fn header_invalid_name() {
        assert!(parse_header("Bad Name: abc").is_err());
    }

    #[test]
    fn header_value_too_long() {
        let raw = format!("X-Big: {}", "a".repeat(MAX_HEADER_VALUE_LENGTH + 1));
        assert!(parse_header(&raw).is_err());
    }

    #[test]
    fn headers_append_repeated_names() {
        let headers = parse_headers(&["Accept: text/plain", "accept: application/json"]).unwrap();
        assert_eq!(headers.get_all("accept").iter().count(), 2);
    }

    #[test]
    fn json_body_valid() {
        let value = parse_json_body(r#"{"name":"widget","qty":5}"#).unwrap();
        assert_eq!(value["qty"], 5);
    }

    #[test]
    fn json_body_invalid() {
        let err = parse_json_body("{name: widget}").unwrap_err();
        assert!(err.to_string().starts_with("Invalid input: request body is not valid JSON"));
    }
}
