//! Error types for the API client.

use http::{HeaderMap, StatusCode};

/// Errors that can occur when making API requests.
///
/// Exactly one shape applies to each failed call: the server answered with
/// an error status, the request went out but nothing came back, or the
/// request could not be built in the first place.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server responded with a non-success status.
    #[error("Request failed with status code {}", .status.as_u16())]
    Server {
        status: StatusCode,
        headers: HeaderMap,
        /// Body parsed as JSON, when it parses.
        body: Option<serde_json::Value>,
        /// Body as text.
        raw: String,
    },
    /// The request was sent but no response arrived (connect failure,
    /// timeout, or a body stream that broke off).
    #[error("No response received: {reason}")]
    NoResponse {
        reason: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    /// The request could not be constructed or handed to the transport.
    #[error("Failed to prepare request: {reason}")]
    RequestSetup { reason: String },
}

impl Error {
    /// Builds a [`Error::Server`] from a received error response.
    pub fn server(status: StatusCode, headers: HeaderMap, raw: String) -> Self {
        let body = serde_json::from_str::<serde_json::Value>(&raw).ok();
        Self::Server {
            status,
            headers,
            body,
            raw,
        }
    }

    pub fn no_response(reason: impl Into<String>) -> Self {
        Self::NoResponse {
            reason: reason.into(),
            source: None,
        }
    }

    pub fn request_setup(reason: impl Into<String>) -> Self {
        Self::RequestSetup {
            reason: reason.into(),
        }
    }

    /// Maps a transport error onto the taxonomy. Builder errors never left
    /// the process; everything else counts as a missing response.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Self::request_setup(err.to_string());
        }
        let reason = if err.is_timeout() {
            "timed out waiting for the server".to_string()
        } else if err.is_connect() {
            "could not connect to the server".to_string()
        } else {
            err.to_string()
        };
        Self::NoResponse {
            reason,
            source: Some(err),
        }
    }

    /// Status code of a server error response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The `message` field of a structured server error body.
    ///
    /// Returns `None` when there is no body, the body is not a JSON object,
    /// or `message` is missing, blank, or not a string.
    pub fn server_message(&self) -> Option<&str> {
        let Self::Server { body, .. } = self else {
            return None;
        };
        body.as_ref()?
            .get("message")?
            .as_str()
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(status: u16, raw: &str) -> Error {
        Error::server(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            raw.to_string(),
        )
    }

    #[test]
    fn server_message_from_json_body() {
        let err = server(404, r#"{"message":"not found"}"#);
        assert_eq!(err.server_message(), Some("not found"));
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn server_message_missing_field() {
        let err = server(404, r#"{"error":"nope"}"#);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn server_message_non_json_body() {
        let err = server(404, "<html>Not Found</html>");
        assert_eq!(err.server_message(), None);
        if let Error::Server { body, raw, .. } = &err {
            assert!(body.is_none());
            assert_eq!(raw, "<html>Not Found</html>");
        } else {
            panic!("expected server error");
        }
    }

    #[test]
    fn server_message_wrong_shapes() {
        assert_eq!(server(400, r#"{"message":42}"#).server_message(), None);
        assert_eq!(server(400, r#"["message"]"#).server_message(), None);
        assert_eq!(server(400, r#"{"message":"  "}"#).server_message(), None);
        assert_eq!(server(400, "").server_message(), None);
    }

    #[test]
    fn non_server_errors_have_no_status() {
        assert_eq!(Error::no_response("offline").status(), None);
        assert_eq!(Error::request_setup("bad url").server_message(), None);
    }

    #[test]
    fn display_matches_shape() {
        assert_eq!(
            server(500, "").to_string(),
            "Request failed with status code 500"
        );
        assert_eq!(
            Error::no_response("offline").to_string(),
            "No response received: offline"
        );
        assert_eq!(
            Error::request_setup("bad url").to_string(),
            "Failed to prepare request: bad url"
        );
    }
}
