use std::time::Duration;

/// Builder for [`OllamaConfig`].
#[derive(Clone, Debug, PartialEq)]
pub struct OllamaConfigBuilder {
    model: Option<String>,
    base_url: Option<String>,
    temperature: Option<f32>,
    num_predict: Option<u32>,
    timeout: Option<Duration>,
}

impl OllamaConfigBuilder {
    /// Creates a builder with all values defaulted.
    #[inline]
    pub fn new() -> Self {
        Self {
            model: None,
            base_url: None,
            temperature: None,
            num_predict: None,
            timeout: None,
        }
    }

    /// Sets the model to use.
    #[inline]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets a custom base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the sampling temperature.
    #[inline]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the output length cap, in tokens.
    #[inline]
    pub fn with_num_predict(mut self, num_predict: u32) -> Self {
        self.num_predict = Some(num_predict);
        self
    }

    /// Sets a timeout for the whole completion request.
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> OllamaConfig {
        OllamaConfig {
            model: self.model.unwrap_or_else(|| "llama3".to_string()),
            base_url: self
                .base_url
                .unwrap_or_else(|| "http://localhost:11434".to_string()),
            temperature: self.temperature.unwrap_or(0.8),
            num_predict: self.num_predict.unwrap_or(256),
            timeout: self.timeout,
        }
    }
}

impl Default for OllamaConfigBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the Ollama provider.
///
/// Sampling parameters are fixed at construction and passed through
/// with every request; the executor core never sees them.
#[derive(Clone, Debug, PartialEq)]
pub struct OllamaConfig {
    pub(crate) model: String,
    pub(crate) base_url: String,
    pub(crate) temperature: f32,
    pub(crate) num_predict: u32,
    pub(crate) timeout: Option<Duration>,
}
