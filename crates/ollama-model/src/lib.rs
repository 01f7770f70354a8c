//! A completion provider backed by a local Ollama server.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use reagent_model::{
    CompletionProvider, CompletionProviderError, CompletionRequest, ErrorKind,
};
use reqwest::{header, Client, StatusCode};

pub use config::{OllamaConfig, OllamaConfigBuilder};

/// Error type for [`OllamaProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        let kind = if err.is_connect() || err.is_timeout() {
            ErrorKind::Unavailable
        } else if err.status() == Some(StatusCode::TOO_MANY_REQUESTS) {
            ErrorKind::RateLimitExceeded
        } else {
            ErrorKind::Other
        };
        Self::new(format!("{err}"), kind)
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl CompletionProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Ollama completion provider, speaking the `/api/generate` protocol.
#[derive(Clone, Debug)]
pub struct OllamaProvider {
    client: Client,
    config: Arc<OllamaConfig>,
}

impl OllamaProvider {
    /// Creates a new `OllamaProvider` with the given configuration.
    pub fn new(config: OllamaConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client =
            builder.build().expect("failed to build the HTTP client");
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

impl CompletionProvider for OllamaProvider {
    type Error = Error;

    fn complete(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'static
    {
        let ollama_req = proto::create_request(req, &self.config);
        let resp_fut = self
            .client
            .post(format!("{}{}", self.config.base_url, "/api/generate"))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&ollama_req)
            .send();

        async move {
            let resp = match resp_fut.await {
                Ok(resp) => resp,
                Err(err) => {
                    error!("request failed: {err}");
                    return Err(Error::from_reqwest(err));
                }
            };

            if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                return Err(Error::new(
                    "the Ollama server is rate limiting requests",
                    ErrorKind::RateLimitExceeded,
                ));
            }
            let resp = match resp.error_for_status() {
                Ok(resp) => resp,
                Err(err) => {
                    error!("got an error status: {err}");
                    return Err(Error::from_reqwest(err));
                }
            };

            let body: proto::GenerateResponse = match resp.json().await {
                Ok(body) => body,
                Err(err) => {
                    error!("failed to decode the response body: {err}");
                    return Err(Error::from_reqwest(err));
                }
            };

            trace!(
                "received {} bytes of completion",
                body.response.len()
            );
            Ok(body.response)
        }
    }
}
