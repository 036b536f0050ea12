//! Access token source consumed by the request interceptor.

use std::sync::Arc;

use async_trait::async_trait;

/// Read-only view of wherever the application keeps its access token.
///
/// The client only ever reads. Storing, refreshing, and revoking tokens are
/// the owner's business.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the current access token, if any.
    async fn access_token(&self) -> Option<String>;
}

/// A store that never has a token.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoToken;

#[async_trait]
impl TokenStore for NoToken {
    async fn access_token(&self) -> Option<String> {
        None
    }
}

#[async_trait]
impl<T: TokenStore + ?Sized> TokenStore for Arc<T> {
    async fn access_token(&self) -> Option<String> {
        (**self).access_token().await
    }
}
