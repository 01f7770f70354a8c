//! Run transcript types.

/// One completed reason/act/observe exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub(crate) thought: String,
    pub(crate) action: String,
    pub(crate) action_input: String,
    pub(crate) observation: String,
}

impl Turn {
    /// Returns the reasoning the model emitted before acting.
    #[inline]
    pub fn thought(&self) -> &str {
        &self.thought
    }

    /// Returns the name of the tool that was invoked.
    #[inline]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the input the tool was invoked with.
    #[inline]
    pub fn action_input(&self) -> &str {
        &self.action_input
    }

    /// Returns the observation the tool produced.
    #[inline]
    pub fn observation(&self) -> &str {
        &self.observation
    }
}

/// The growing record of prior turns within one run.
///
/// The transcript is append-only and owned by the run loop; it is
/// rendered back into every prompt and discarded when the run ends.
#[derive(Clone, Default, Debug)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Returns the recorded turns in order.
    #[inline]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub(crate) fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Serializes the transcript into scratchpad text.
    ///
    /// One labeled `Thought/Action/Action Input/Observation` block per
    /// turn, matching the format the prompt template teaches the model.
    /// An empty transcript renders as an empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for turn in &self.turns {
            out.push_str(&format!(
                "\nThought: {}\nAction: {}\nAction Input: {}\nObservation: {}\n",
                turn.thought, turn.action, turn.action_input, turn.observation
            ));
        }
        out
    }
}
