//! An abstraction layer for text-completion services.
//!
//! This crate establishes an unified protocol for the executor to talk
//! to a completion backend, so that the executor can seamlessly switch
//! between backends without modifying the core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.
//!
//! Users of this crate may add some extra functionalities or wrappers,
//! depending on their own use cases. Those extra code should be placed
//! in their own crate.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;

pub use error::*;
pub use provider::*;
pub use request::*;
