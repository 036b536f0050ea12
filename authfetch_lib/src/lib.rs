//! Library layer for authfetch: settings, token sources, notification
//! surfaces, and input validation around the `authfetch_api` client.

pub mod config;
pub mod error;
pub mod notifier;
pub mod setup;
pub mod token_store;
pub mod validation;

pub use authfetch_api;
pub use authfetch_api::{
    Client, ClientConfig, Error as ApiError, Locale, Notice, Notifier, Platform,
    RequestDescriptor, ResponseDescriptor, TokenStore,
};

pub use config::{ConfigError, Settings, TokenSource};
pub use error::AuthFetchError;
pub use notifier::{notifier_for, DialogNotifier, ToastNotifier};
pub use setup::{connect, connect_with};
pub use token_store::{EnvTokenStore, FileTokenStore, MemoryTokenStore};
