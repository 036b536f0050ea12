//! Request and response interceptors.
//!
//! The request side attaches the bearer token and logs the outgoing call.
//! The response side logs traffic and turns every failure into exactly one
//! localized notification before handing the error back unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use http::header::{HeaderValue, AUTHORIZATION};

use crate::messages::{Locale, Notice};
use crate::notify::Notifier;
use crate::request::RequestDescriptor;
use crate::response::{truncate_body, ResponseDescriptor};
use crate::token::TokenStore;
use crate::Error;

/// A caller-supplied step that runs before the token attacher.
///
/// Hooks run in the order they were added. A hook that fails stops the
/// call: nothing is sent and [`Interceptors::on_request_error`] shows the
/// generic request error notice.
#[async_trait]
pub trait RequestHook: Send + Sync {
    async fn prepare(&self, request: RequestDescriptor) -> Result<RequestDescriptor, Error>;
}

/// The interceptor pair installed on a [`crate::Client`].
pub struct Interceptors {
    tokens: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    locale: Locale,
}

impl Interceptors {
    pub fn new(tokens: Arc<dyn TokenStore>, notifier: Arc<dyn Notifier>, locale: Locale) -> Self {
        Self {
            tokens,
            notifier,
            locale,
        }
    }

    /// Attaches `Authorization: Bearer <token>` when the store has a
    /// non-empty token, then logs the method and URL.
    ///
    /// Fetching the token is the only await before the request goes out.
    /// Other headers are left untouched. A token that cannot be carried in
    /// a header fails with [`Error::RequestSetup`], which the client hands
    /// to [`Interceptors::on_response_error`].
    pub async fn on_request(
        &self,
        mut request: RequestDescriptor,
    ) -> Result<RequestDescriptor, Error> {
        match self.tokens.access_token().await.filter(|t| !t.is_empty()) {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                    tracing::error!("Access token is not a valid header value: {}", e);
                    Error::request_setup("access token is not a valid header value")
                })?;
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
            }
            None => tracing::debug!("No access token available, sending without Authorization"),
        }

        tracing::info!(
            "[request] {} {}",
            request.method.as_str().to_uppercase(),
            request.url
        );
        Ok(request)
    }

    /// Handles a failure raised before the token attacher ran (a
    /// [`RequestHook`] rejecting the call): logs it, shows the generic
    /// request error notice, and returns the error unchanged.
    pub fn on_request_error(&self, err: Error) -> Error {
        tracing::error!("[request error] {}", err);
        self.notify(&Notice::RequestFailed);
        err
    }

    /// Logs status and body. The response passes through untouched.
    pub fn on_response(&self, response: ResponseDescriptor) -> ResponseDescriptor {
        tracing::info!(
            "[response] {} {}",
            response.status.as_u16(),
            truncate_body(&response.text())
        );
        response
    }

    /// Logs the failure, shows one notification chosen by [`classify`], and
    /// returns the error unchanged.
    pub fn on_response_error(&self, err: Error) -> Error {
        tracing::error!("[response error] {}", err);
        if let Error::Server {
            status, headers, ..
        } = &err
        {
            tracing::warn!("Response status: {}", status.as_u16());
            tracing::debug!("Response headers: {:?}", headers);
        }
        self.notify(&classify(&err));
        err
    }

    fn notify(&self, notice: &Notice) {
        let text = notice.text(self.locale);
        tracing::debug!("Showing notification: {}", text);
        self.notifier.show_message(&text);
    }
}

/// Picks the notification for a failed call.
///
/// | error | notice |
/// |---|---|
/// | server 401 | [`Notice::LoginRequired`] |
/// | server 403 | [`Notice::AccessDenied`] |
/// | server 500 | [`Notice::InternalServerError`] |
/// | other server status | body `message`, else [`Notice::Unknown`] |
/// | no response | [`Notice::NoResponse`] |
/// | request setup | [`Notice::RequestSetup`] |
pub fn classify(err: &Error) -> Notice {
    match err {
        Error::Server { status, .. } => match status.as_u16() {
            401 => Notice::LoginRequired,
            403 => Notice::AccessDenied,
            500 => Notice::InternalServerError,
            _ => err
                .server_message()
                .map(|m| Notice::ServerMessage(m.to_string()))
                .unwrap_or(Notice::Unknown),
        },
        Error::NoResponse { .. } => Notice::NoResponse,
        Error::RequestSetup { .. } => Notice::RequestSetup,
    }
}
