//! HTTP client that attaches bearer tokens, logs traffic, and turns failed
//! calls into localized user notifications.
//!
//! Token storage and notification display belong to the host application
//! and are plugged in through [`TokenStore`] and [`Notifier`].

mod client;
mod errors;
pub mod interceptor;
mod messages;
mod notify;
mod request;
mod response;
mod token;
pub use self::client::{default_user_agent, Client, ClientConfig, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::interceptor::{classify, Interceptors, RequestHook};
pub use self::messages::{Locale, Notice};
pub use self::notify::{Notifier, Platform};
pub use self::request::RequestDescriptor;
pub use self::response::ResponseDescriptor;
pub use self::token::{NoToken, TokenStore};

pub use http::{header, HeaderMap, HeaderValue, Method, StatusCode};
