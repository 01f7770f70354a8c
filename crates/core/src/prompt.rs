//! Prompt rendering.
//!
//! The instruction template is the model-facing half of the text
//! protocol: it teaches the model the `Thought:`/`Action:`/
//! `Action Input:`/`Observation:`/`Final Answer:` labels that the
//! parser later extracts. The template text must not drift, models are
//! sensitive to the exact wording and layout.

use crate::tool::ToolRegistry;
use crate::transcript::Transcript;

const TEMPLATE: &str = include_str!("react_template.txt");

/// Renders the full prompt for one completion call.
///
/// Substitutes the tool descriptions (one `name: description` line per
/// registered tool), the comma-joined tool names, the question and the
/// serialized transcript into the fixed template. Rendering is pure:
/// identical inputs produce byte-identical output, and an empty
/// registry renders as empty lists rather than failing.
pub fn render(
    tools: &ToolRegistry,
    question: &str,
    transcript: &Transcript,
) -> String {
    let tool_lines = tools
        .iter()
        .map(|t| format!("{}: {}", t.name(), t.description()))
        .collect::<Vec<_>>()
        .join("\n");
    let tool_names = tools
        .iter()
        .map(|t| t.name().to_owned())
        .collect::<Vec<_>>()
        .join(", ");

    TEMPLATE
        .replace("{tools}", &tool_lines)
        .replace("{tool_names}", &tool_names)
        .replace("{input}", question)
        .replace("{agent_scratchpad}", &transcript.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::Tool;

    struct FakeTool {
        name: &'static str,
        description: &'static str,
    }

    impl Tool for FakeTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            self.description
        }

        fn invoke(&self, input: &str) -> String {
            input.to_owned()
        }
    }

    fn sample_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry
            .register(FakeTool {
                name: "get_text_length",
                description: "Finds the length of the input text.",
            })
            .unwrap();
        registry
            .register(FakeTool {
                name: "echo",
                description: "Returns the input unchanged.",
            })
            .unwrap();
        registry
    }

    #[test]
    fn test_render_is_pure() {
        let registry = sample_registry();
        let transcript = Transcript::default();

        let a = render(&registry, "how long is 'hi'?", &transcript);
        let b = render(&registry, "how long is 'hi'?", &transcript);
        assert_eq!(a, b);
    }

    #[test]
    fn test_tool_lists_follow_registration_order() {
        let registry = sample_registry();
        let rendered =
            render(&registry, "question", &Transcript::default());

        assert!(rendered.contains(
            "get_text_length: Finds the length of the input text.\
             \necho: Returns the input unchanged."
        ));
        assert!(rendered.contains("one of [get_text_length, echo]"));
    }

    #[test]
    fn test_question_is_embedded_verbatim() {
        let registry = sample_registry();
        let rendered = render(
            &registry,
            "what is the text length of 'hello world'?",
            &Transcript::default(),
        );

        assert!(rendered.contains(
            "Question: what is the text length of 'hello world'?"
        ));
        // Before the first iteration the scratchpad slot is empty, so
        // the prompt ends right after the dangling `Thought:` label.
        assert!(rendered.ends_with("Thought:\n"));
    }

    #[test]
    fn test_empty_registry_renders_empty_lists() {
        let registry = ToolRegistry::new();
        let rendered = render(&registry, "question", &Transcript::default());

        assert!(rendered.contains("the following tools:\n\n\n\nUse"));
        assert!(rendered.contains("should be one of []"));
    }

    #[test]
    fn test_all_protocol_labels_present() {
        let rendered = render(
            &sample_registry(),
            "question",
            &Transcript::default(),
        );

        for label in [
            "Thought:",
            "Action:",
            "Action Input:",
            "Observation:",
            "Final Answer:",
        ] {
            assert!(rendered.contains(label), "missing label {label}");
        }
    }
}
