//! Credentials for requests to the app backend.

use reqwest::RequestBuilder;

/// Attaches whatever credentials the backend expects to an outgoing request.
pub trait RequestAuthenticator: std::fmt::Debug + Send + Sync {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder;
}

impl<T: RequestAuthenticator + ?Sized> RequestAuthenticator for Box<T> {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        (**self).authenticate(request)
    }
}

/// Sends a session token as `Authorization: Bearer <token>`.
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BearerToken").field(&"[redacted]").finish()
    }
}

impl RequestAuthenticator for BearerToken {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.0)
    }
}

/// Leaves requests untouched; for local development backends.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unauthenticated;

impl RequestAuthenticator for Unauthenticated {
    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }
}
