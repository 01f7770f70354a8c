//! A local fake completion backend for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::future::ready;
use std::sync::{Arc, Mutex};

use reagent_model::{
    CompletionProvider, CompletionProviderError, CompletionRequest, ErrorKind,
};

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl CompletionProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

struct Step {
    preset: PresetCompletion,
    attempts: u64,
}

#[derive(Default)]
struct State {
    script: VecDeque<Step>,
    prompts: Vec<String>,
}

/// A local fake completion backend for testing purpose.
///
/// Before sending requests, you need to setup the completion script,
/// which is how the backend should respond to each call, in order. If
/// there are no enough steps in the script, an error will be returned.
/// Every received prompt is recorded and can be inspected afterwards.
/// Clones share the script and the recordings, so a test can keep a
/// clone around to observe what the executor actually sent.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestCompletionProvider {
    state: Arc<Mutex<State>>,
}

impl TestCompletionProvider {
    /// Appends a completion step to the script.
    #[inline]
    pub fn add_completion_step(&mut self, preset: PresetCompletion) {
        self.state.lock().unwrap().script.push_back(Step {
            preset,
            attempts: 0,
        });
    }

    /// Returns the prompts received so far, in call order.
    #[inline]
    pub fn prompts(&self) -> Vec<String> {
        self.state.lock().unwrap().prompts.clone()
    }

    fn next_completion(&self, prompt: &str) -> Result<String, Error> {
        let mut state = self.state.lock().unwrap();
        state.prompts.push(prompt.to_owned());

        let Some(step) = state.script.front_mut() else {
            return Err(Error {
                message: "no enough steps",
                kind: ErrorKind::Other,
            });
        };

        match step.preset.failures {
            Some(0) => {
                return Err(Error {
                    message: "preset failure",
                    kind: ErrorKind::Unavailable,
                });
            }
            Some(failures) if step.attempts < failures => {
                step.attempts += 1;
                return Err(Error {
                    message: "preset failure",
                    kind: ErrorKind::Unavailable,
                });
            }
            _ => {}
        }

        let step = state.script.pop_front().unwrap();
        Ok(step.preset.text)
    }
}

impl CompletionProvider for TestCompletionProvider {
    type Error = Error;

    fn complete(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'static
    {
        ready(self.next_completion(&req.prompt))
    }
}
