use serde::{Deserialize, Serialize};

/// The preset output for one completion call.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetCompletion {
    /// The raw text the provider returns for this call.
    pub text: String,
    /// If set, the call will fail in the first `failures` attempts.
    /// `Some(0)` means the call will fail infinitely.
    pub failures: Option<u64>,
}

impl PresetCompletion {
    /// Creates a `PresetCompletion` with the specified output text.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            failures: None,
        }
    }

    /// Sets failure times before a successful completion. `0` means the
    /// call will always be a failure.
    #[inline]
    pub fn with_failures(mut self, failures: u64) -> Self {
        self.failures = Some(failures);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let preset = PresetCompletion::with_text(
            "Thought: done\nFinal Answer: 42",
        )
        .with_failures(2);

        let serialized = serde_json::to_string(&preset).unwrap();
        let deserialized: PresetCompletion =
            serde_json::from_str(&serialized).unwrap();

        assert_eq!(preset, deserialized);
    }
}
