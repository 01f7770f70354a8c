//! Core logic including the agent loop, tool dispatch, prompt rendering
//! and model output parsing.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod agent;
mod client;
pub mod parser;
pub mod prompt;
pub mod tool;
pub mod transcript;

pub use agent::{
    Agent, AgentBuilder, RunError, RunOutcome, DEFAULT_MAX_ITERATIONS,
};
