//! Model output parsing.
//!
//! The model side of the protocol is free-form text with labeled lines;
//! nothing enforces the format, so extraction has to tolerate malformed,
//! partial or adversarial output. The grammar is a handful of labeled
//! patterns evaluated in strict precedence order, and the result is a
//! tagged variant so the run loop can branch exhaustively without
//! exceptions or sentinels.

use std::sync::LazyLock;

use regex::Regex;

static FINAL_ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Final Answer:\s*(.*)").unwrap());
static ACTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Action:\s*(\w+)").unwrap());
static ACTION_INPUT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Action Input:\s*(.*)").unwrap());

/// The parsed intent of one model output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedOutput {
    /// The model concluded with a final answer.
    FinalAnswer {
        /// The answer text, trimmed.
        text: String,
    },
    /// The model requested a tool invocation.
    ToolCall {
        /// The tool name following `Action:`, trimmed.
        name: String,
        /// The tool input, trimmed and stripped of surrounding quotes.
        input: String,
        /// The reasoning preceding the action; empty when absent.
        thought: String,
    },
    /// The output contained neither a final answer nor a complete
    /// action pair.
    Unparseable {
        /// The raw model output, kept for diagnosis.
        raw: String,
    },
}

/// Extracts the structured intent from raw model output.
///
/// A final answer always wins over action-shaped text: models sometimes
/// keep writing after concluding, and only the conclusion counts. The
/// final-answer label is matched case-insensitively. A tool call needs
/// both an `Action:` line naming a single bare token and an
/// `Action Input:` line; when several occurrences are present, the
/// first match of each is honored. Anything else is unparseable.
pub fn parse(raw: &str) -> ParsedOutput {
    if let Some(caps) = FINAL_ANSWER_RE.captures(raw) {
        debug!("parsed a final answer");
        return ParsedOutput::FinalAnswer {
            text: caps[1].trim().to_owned(),
        };
    }

    let action = ACTION_RE.captures(raw);
    let action_input = ACTION_INPUT_RE.captures(raw);
    let (Some(action), Some(action_input)) = (action, action_input) else {
        warn!("model output matched neither a final answer nor an action");
        return ParsedOutput::Unparseable {
            raw: raw.to_owned(),
        };
    };

    let name = action[1].trim().to_owned();
    let input = unquote(&action_input[1]);
    let thought = thought_segment(raw);
    debug!("parsed a tool call: {name}");
    ParsedOutput::ToolCall {
        name,
        input,
        thought,
    }
}

/// Strips whitespace, then surrounding double quotes, then surrounding
/// single quotes. Tool inputs are expected as bare values, but models
/// often quote them anyway.
fn unquote(value: &str) -> String {
    value.trim().trim_matches('"').trim_matches('\'').to_owned()
}

/// Extracts the text between the first `Thought:` marker and the
/// following `Action:` marker. The thought is only recorded in the
/// transcript, so a missing marker yields an empty string rather than
/// a failure.
fn thought_segment(raw: &str) -> String {
    let Some((_, after)) = raw.split_once("Thought:") else {
        return String::new();
    };
    let segment = match after.split_once("Action:") {
        Some((before, _)) => before,
        None => after,
    };
    segment.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_answer() {
        let output = "Thought: I now know the final answer\n\
                      Final Answer: 11 characters";
        assert_eq!(
            parse(output),
            ParsedOutput::FinalAnswer {
                text: "11 characters".to_owned()
            }
        );
    }

    #[test]
    fn test_final_answer_is_case_insensitive() {
        assert_eq!(
            parse("final answer:   42  "),
            ParsedOutput::FinalAnswer {
                text: "42".to_owned()
            }
        );
    }

    #[test]
    fn test_final_answer_wins_over_preceding_action() {
        let output = "Thought: measuring first\n\
                      Action: get_text_length\n\
                      Action Input: hello\n\
                      Final Answer: 5 characters";
        assert_eq!(
            parse(output),
            ParsedOutput::FinalAnswer {
                text: "5 characters".to_owned()
            }
        );
    }

    #[test]
    fn test_final_answer_on_next_line() {
        // `\s*` spans the newline, so an answer placed on the line
        // after the label is still captured.
        assert_eq!(
            parse("Final Answer:\n11 characters"),
            ParsedOutput::FinalAnswer {
                text: "11 characters".to_owned()
            }
        );
    }

    #[test]
    fn test_tool_call() {
        let output = "Thought: I should measure it.\n\
                      Action: get_text_length\n\
                      Action Input: 'hello world'";
        assert_eq!(
            parse(output),
            ParsedOutput::ToolCall {
                name: "get_text_length".to_owned(),
                input: "hello world".to_owned(),
                thought: "I should measure it.".to_owned(),
            }
        );
    }

    #[test]
    fn test_double_quotes_stripped() {
        let output = "Action: echo\nAction Input: \"some text\"";
        let ParsedOutput::ToolCall { input, .. } = parse(output) else {
            panic!("expected a tool call");
        };
        assert_eq!(input, "some text");
    }

    #[test]
    fn test_missing_thought_is_not_an_error() {
        let output = "Action: echo\nAction Input: hi";
        assert_eq!(
            parse(output),
            ParsedOutput::ToolCall {
                name: "echo".to_owned(),
                input: "hi".to_owned(),
                thought: String::new(),
            }
        );
    }

    #[test]
    fn test_first_action_wins() {
        let output = "Action: first_tool\n\
                      Action Input: one\n\
                      Action: second_tool\n\
                      Action Input: two";
        let ParsedOutput::ToolCall { name, input, .. } = parse(output)
        else {
            panic!("expected a tool call");
        };
        assert_eq!(name, "first_tool");
        assert_eq!(input, "one");
    }

    #[test]
    fn test_missing_action_input_is_unparseable() {
        let output = "Thought: hmm\nAction: get_text_length";
        assert_eq!(
            parse(output),
            ParsedOutput::Unparseable {
                raw: output.to_owned()
            }
        );
    }

    #[test]
    fn test_missing_action_is_unparseable() {
        let output = "Thought: hmm\nAction Input: hello";
        assert_eq!(
            parse(output),
            ParsedOutput::Unparseable {
                raw: output.to_owned()
            }
        );
    }

    #[test]
    fn test_prose_is_unparseable() {
        let output = "I am not sure what you mean by that.";
        assert!(matches!(
            parse(output),
            ParsedOutput::Unparseable { raw } if raw == output
        ));
    }
}
