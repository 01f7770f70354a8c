mod builder;

use reagent_model::{CompletionProviderError, CompletionRequest};
use thiserror::Error;

use crate::client::CompletionClient;
use crate::parser::{self, ParsedOutput};
use crate::prompt;
use crate::tool::ToolRegistry;
use crate::transcript::{Transcript, Turn};
pub use builder::AgentBuilder;

/// The iteration budget used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: u32 = 15;

type TurnCallback = Box<dyn Fn(&Turn) + Send + Sync>;

/// An agent executor that drives a completion backend through the
/// reason/act/observe loop until it produces a final answer.
///
/// The executor owns a read-only tool registry and a type-erased
/// completion client; per-run state (the transcript and the iteration
/// counter) lives inside [`Agent::run`] and is discarded when the run
/// ends. Construction goes through [`AgentBuilder`].
pub struct Agent {
    client: CompletionClient,
    registry: ToolRegistry,
    max_iterations: u32,
    on_turn: Option<TurnCallback>,
}

/// A successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// The model's final answer, trimmed.
    pub answer: String,
    /// The number of completion calls the run took, counting the one
    /// that produced the final answer.
    pub iterations: u32,
}

/// A terminal failure of a run.
///
/// Every failure is surfaced once, immediately, with enough context to
/// diagnose it externally; the loop performs no retries and no
/// re-prompting.
#[derive(Debug, Error)]
pub enum RunError {
    /// The model requested a tool that is not registered.
    #[error("the model requested an unknown tool `{name}`")]
    UnknownTool {
        /// The offending tool name, exactly as the model wrote it.
        name: String,
    },
    /// The model output contained neither a final answer nor a
    /// complete action pair.
    #[error("could not parse the model output: {raw:?}")]
    Unparseable {
        /// The raw model output, kept for diagnosis.
        raw: String,
    },
    /// The iteration budget ran out before a final answer appeared.
    #[error("no final answer after {iterations} iterations")]
    BudgetExhausted {
        /// The number of completion calls that were made.
        iterations: u32,
    },
    /// The completion backend failed.
    #[error("completion request failed: {0}")]
    Completion(Box<dyn CompletionProviderError>),
}

impl Agent {
    /// Drives the model until it concludes with a final answer or a
    /// terminal failure occurs.
    ///
    /// Each iteration renders the prompt from the accumulated
    /// transcript, sends it to the backend and branches on the parsed
    /// output. The model's behavior is unconstrained text generation,
    /// so the iteration budget is the hard termination bound: the run
    /// makes at most `max_iterations` completion calls.
    pub async fn run(&self, question: &str) -> Result<RunOutcome, RunError> {
        let mut transcript = Transcript::default();
        let mut iterations = 0;

        while iterations < self.max_iterations {
            iterations += 1;

            let rendered =
                prompt::render(&self.registry, question, &transcript);
            let output = self
                .client
                .complete(CompletionRequest::new(rendered))
                .await
                .map_err(RunError::Completion)?;
            debug!("model output (iteration {iterations}):\n{output}");

            match parser::parse(&output) {
                ParsedOutput::FinalAnswer { text } => {
                    debug!("final answer after {iterations} iteration(s)");
                    return Ok(RunOutcome {
                        answer: text,
                        iterations,
                    });
                }
                ParsedOutput::ToolCall {
                    name,
                    input,
                    thought,
                } => {
                    let tool = self.registry.lookup(&name).map_err(|_| {
                        RunError::UnknownTool { name: name.clone() }
                    })?;
                    let observation = tool.invoke(&input);
                    trace!("tool `{name}` observed: {observation}");

                    let turn = Turn {
                        thought,
                        action: name,
                        action_input: input,
                        observation,
                    };
                    if let Some(on_turn) = &self.on_turn {
                        on_turn(&turn);
                    }
                    transcript.push(turn);
                }
                ParsedOutput::Unparseable { raw } => {
                    warn!("aborting the run on unparseable model output");
                    return Err(RunError::Unparseable { raw });
                }
            }
        }

        Err(RunError::BudgetExhausted { iterations })
    }
}
