use reagent_model::CompletionProvider;

use super::{Agent, TurnCallback, DEFAULT_MAX_ITERATIONS};
use crate::client::CompletionClient;
use crate::tool::{RegistryError, Tool, ToolRegistry};
use crate::transcript::Turn;

/// [`Agent`] builder.
pub struct AgentBuilder {
    client: CompletionClient,
    tools: Vec<Box<dyn Tool>>,
    max_iterations: u32,
    on_turn: Option<TurnCallback>,
}

impl AgentBuilder {
    /// Creates a new builder with the specified completion provider.
    #[inline]
    pub fn with_provider<P: CompletionProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            client: CompletionClient::new(provider),
            tools: vec![],
            max_iterations: DEFAULT_MAX_ITERATIONS,
            on_turn: None,
        }
    }

    /// Registers a tool.
    #[inline]
    pub fn with_tool<T: Tool>(mut self, tool: T) -> Self {
        self.tools.push(Box::new(tool));
        self
    }

    /// Sets the iteration budget, the maximum number of completion
    /// calls one run may make.
    #[inline]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Attaches a callback to be invoked after every completed turn.
    #[inline]
    pub fn on_turn(
        mut self,
        on_turn: impl Fn(&Turn) + Send + Sync + 'static,
    ) -> Self {
        self.on_turn = Some(Box::new(on_turn));
        self
    }

    /// Builds the agent, rejecting duplicate tool names.
    pub fn build(self) -> Result<Agent, RegistryError> {
        let mut registry = ToolRegistry::new();
        for tool in self.tools {
            registry.register_boxed(tool)?;
        }
        Ok(Agent {
            client: self.client,
            registry,
            max_iterations: self.max_iterations,
            on_turn: self.on_turn,
        })
    }
}
