use serde::{Deserialize, Serialize};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The completion service is rate limited.
    RateLimitExceeded,
    /// The completion service could not be reached.
    Unavailable,
    /// Any other errors.
    Other,
}
