use std::error::Error;

use crate::error::ErrorKind;
use crate::request::CompletionRequest;

/// The error type for a completion provider.
pub trait CompletionProviderError: Error + Send + Sync + 'static {
    /// Returns the kind of this error.
    fn kind(&self) -> ErrorKind;
}

/// A type that represents a completion backend, which turns a rendered
/// prompt into raw output text.
///
/// Once the provider is created, it should behave like a stateless object.
/// It can still have internal state, but callers should not rely on it,
/// and the provider should be prepared for being dropped anytime.
pub trait CompletionProvider: Send + Sync {
    /// The error type that may be returned by the provider.
    type Error: CompletionProviderError;

    /// Sends a prompt to the backend and resolves to the raw output text.
    fn complete(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'static;
}
