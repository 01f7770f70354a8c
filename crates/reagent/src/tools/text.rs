use reagent_core::tool::Tool;

/// A tool that measures the length of a piece of text.
pub struct TextLengthTool;

impl TextLengthTool {
    /// Creates a new text length tool.
    #[inline]
    pub fn new() -> Self {
        TextLengthTool
    }
}

impl Default for TextLengthTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for TextLengthTool {
    fn name(&self) -> &str {
        "get_text_length"
    }

    fn description(&self) -> &str {
        "Finds the length of the input text in characters."
    }

    fn invoke(&self, input: &str) -> String {
        // Models occasionally leave stray quotes or a trailing newline
        // around the value even after the executor's own unquoting.
        let text = input
            .trim_matches(|c| c == '\'' || c == '\n')
            .trim_matches('"');
        text.chars().count().to_string()
    }
}
