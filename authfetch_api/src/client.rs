//! HTTP client with the interceptor pair installed.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::{
    interceptor::{Interceptors, RequestHook},
    messages::Locale,
    notify::Notifier,
    request::RequestDescriptor,
    response::ResponseDescriptor,
    token::TokenStore,
    Error,
};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings the underlying transport is built with. Fixed for the lifetime
/// of a [`Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Prefix for relative request URLs. Empty means every request URL
    /// must be absolute.
    pub base_url: String,
    pub timeout: Duration,
    /// Keep and resend cookies across calls.
    pub with_credentials: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: DEFAULT_TIMEOUT,
            with_credentials: true,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_credentials(mut self, with_credentials: bool) -> Self {
        self.with_credentials = with_credentials;
        self
    }
}

/// Returns `authfetch/<version>`.
pub fn default_user_agent() -> String {
    format!("authfetch/{}", env!("CARGO_PKG_VERSION"))
}

/// HTTP client that runs every call through [`Interceptors`].
///
/// Calls fail with the original [`Error`] after one notification has been
/// shown. Nothing is retried and no failure is turned into a success.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    interceptors: Interceptors,
    hooks: Vec<Arc<dyn RequestHook>>,
}

impl Client {
    /// Builds the transport once from `config` and installs the interceptors.
    pub fn new(
        config: ClientConfig,
        tokens: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        locale: Locale,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .cookie_store(config.with_credentials)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::request_setup(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self {
            http,
            config,
            interceptors: Interceptors::new(tokens, notifier, locale),
            hooks: Vec::new(),
        })
    }

    /// Adds a step that runs ahead of the token attacher on every call.
    pub fn with_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Sends `request` through the hooks, the request interceptor, the
    /// transport, and the response interceptor.
    ///
    /// A hook failure is handled by the request error handler alone. A
    /// failure in the token attacher or later goes to the response error
    /// handler. Either way each failed call produces exactly one
    /// notification.
    pub async fn send(&self, mut request: RequestDescriptor) -> Result<ResponseDescriptor, Error> {
        for hook in &self.hooks {
            request = match hook.prepare(request).await {
                Ok(request) => request,
                Err(err) => return Err(self.interceptors.on_request_error(err)),
            };
        }
        let request = self
            .interceptors
            .on_request(request)
            .await
            .map_err(|e| self.interceptors.on_response_error(e))?;
        match self.dispatch(request).await {
            Ok(response) => Ok(self.interceptors.on_response(response)),
            Err(err) => Err(self.interceptors.on_response_error(err)),
        }
    }

    pub async fn get(&self, url: &str) -> Result<ResponseDescriptor, Error> {
        self.send(RequestDescriptor::get(url)).await
    }

    pub async fn delete(&self, url: &str) -> Result<ResponseDescriptor, Error> {
        self.send(RequestDescriptor::delete(url)).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<ResponseDescriptor, Error> {
        let request = RequestDescriptor::post(url)
            .with_json(body)
            .map_err(|e| self.interceptors.on_response_error(e))?;
        self.send(request).await
    }

    pub async fn put_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<ResponseDescriptor, Error> {
        let request = RequestDescriptor::put(url)
            .with_json(body)
            .map_err(|e| self.interceptors.on_response_error(e))?;
        self.send(request).await
    }

    pub async fn patch_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<ResponseDescriptor, Error> {
        let request = RequestDescriptor::patch(url)
            .with_json(body)
            .map_err(|e| self.interceptors.on_response_error(e))?;
        self.send(request).await
    }

    async fn dispatch(&self, request: RequestDescriptor) -> Result<ResponseDescriptor, Error> {
        let url = request.resolve_url(&self.config.base_url)?;

        let mut builder = self
            .http
            .request(request.method, url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }
        let prepared = builder.build().map_err(|e| {
            tracing::error!("Failed to build request: {}", e);
            Error::request_setup(e.to_string())
        })?;

        let resp = self
            .http
            .execute(prepared)
            .await
            .map_err(Error::from_transport)?;

        let url = resp.url().to_string();
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::from_transport(e)
        })?;

        if !status.is_success() {
            return Err(Error::server(
                status,
                headers,
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        Ok(ResponseDescriptor {
            url,
            status,
            headers,
            body,
        })
    }
}
