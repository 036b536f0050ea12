//! Read-only access token sources.
//!
//! These adapt wherever the application already keeps its token. None of
//! them refresh or persist anything.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use authfetch_api::TokenStore;

/// Token held in memory by the owning application.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }

    /// Replaces the token. Called by the owner, never by the client.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// Token stored in a file, re-read on every request so the owner can
/// rotate it underneath a running client.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn access_token(&self) -> Option<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_string())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Token file {} does not exist", self.path.display());
                None
            }
            Err(e) => {
                tracing::warn!("Failed to read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// Token read from an environment variable on every request.
#[derive(Clone, Debug)]
pub struct EnvTokenStore {
    var: String,
}

impl EnvTokenStore {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

#[async_trait]
impl TokenStore for EnvTokenStore {
    async fn access_token(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}
