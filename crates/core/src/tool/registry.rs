use thiserror::Error;

use crate::tool::Tool;

/// Errors from the tool registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A tool with the same name has already been registered.
    #[error("a tool named `{0}` is already registered")]
    DuplicateTool(String),
    /// No tool with the given name is registered.
    #[error("no tool named `{0}` is registered")]
    UnknownTool(String),
}

/// Holds the registered tools and dispatches lookups by name.
///
/// Registration order is preserved, it is the order the tools are
/// rendered into the prompt. The registry is only mutated during setup;
/// the run loop treats it as read-only.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, rejecting duplicate names.
    pub fn register<T: Tool>(&mut self, tool: T) -> Result<(), RegistryError> {
        self.register_boxed(Box::new(tool))
    }

    pub(crate) fn register_boxed(
        &mut self,
        tool: Box<dyn Tool>,
    ) -> Result<(), RegistryError> {
        let name = tool.name();
        if self.tools.iter().any(|t| t.name() == name) {
            return Err(RegistryError::DuplicateTool(name.to_owned()));
        }
        self.tools.push(tool);
        Ok(())
    }

    /// Finds a tool by its exact, case-sensitive name.
    pub fn lookup(&self, name: &str) -> Result<&dyn Tool, RegistryError> {
        self.tools
            .iter()
            .map(|t| t.as_ref())
            .find(|t| t.name() == name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_owned()))
    }

    /// Iterates over the tools in registration order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.iter().map(|t| t.as_ref())
    }

    /// Returns whether no tools are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
