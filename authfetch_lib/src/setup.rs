//! Wires settings, token source, and notification surface into a client.

use std::sync::Arc;

use authfetch_api::{Client, NoToken, Notifier, TokenStore};

use crate::config::{Settings, TokenSource};
use crate::error::AuthFetchError;
use crate::notifier::notifier_for;
use crate::token_store::{EnvTokenStore, FileTokenStore, MemoryTokenStore};

/// Token store for the configured source.
pub fn token_store_for(source: &TokenSource) -> Arc<dyn TokenStore> {
    match source {
        TokenSource::None => Arc::new(NoToken),
        TokenSource::Literal(token) => Arc::new(MemoryTokenStore::new(Some(token.clone()))),
        TokenSource::File(path) => Arc::new(FileTokenStore::new(path.clone())),
        TokenSource::Env(var) => Arc::new(EnvTokenStore::new(var.clone())),
    }
}

/// Builds a client that notifies through the platform's own surface.
pub fn connect(settings: &Settings) -> Result<Client, AuthFetchError> {
    connect_with(settings, notifier_for(settings.platform, settings.locale))
}

/// Builds a client that notifies through `notifier`.
pub fn connect_with(
    settings: &Settings,
    notifier: Arc<dyn Notifier>,
) -> Result<Client, AuthFetchError> {
    tracing::debug!(
        "Building client for platform {} (toast: {})",
        settings.platform,
        settings.platform.uses_toast()
    );
    let client = Client::new(
        settings.client_config(),
        token_store_for(&settings.token),
        notifier,
        settings.locale,
    )?;
    Ok(client)
}
