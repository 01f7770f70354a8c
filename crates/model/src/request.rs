use serde::{Deserialize, Serialize};

/// A request to be sent to the completion provider.
///
/// The prompt carries the entire context of the exchange: instructions,
/// available tools and the accumulated scratchpad are all rendered into
/// one string before the request is made. Sampling parameters are not
/// part of the request, they are fixed when the provider is constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The fully rendered prompt text.
    pub prompt: String,
}

impl CompletionRequest {
    /// Creates a request from the given prompt text.
    #[inline]
    pub fn new<S: Into<String>>(prompt: S) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}
