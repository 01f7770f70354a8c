//! A set of built-in tools that models can use.

mod text;

pub use text::TextLengthTool;
