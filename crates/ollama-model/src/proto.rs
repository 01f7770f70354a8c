use reagent_model::CompletionRequest;
use serde::{Deserialize, Serialize};

use crate::OllamaConfig;

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub done: bool,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(
    req: &CompletionRequest,
    config: &OllamaConfig,
) -> GenerateRequest {
    GenerateRequest {
        model: config.model.clone(),
        prompt: req.prompt.clone(),
        stream: false,
        options: GenerateOptions {
            temperature: config.temperature,
            num_predict: config.num_predict,
        },
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::OllamaConfigBuilder;

    #[test]
    fn test_create_request() {
        let request = CompletionRequest::new("What is the answer?");
        let config = OllamaConfigBuilder::new()
            .with_model("custom")
            .with_temperature(0.2)
            .with_num_predict(64)
            .build();

        let expected = GenerateRequest {
            model: "custom".to_owned(),
            prompt: "What is the answer?".to_owned(),
            stream: false,
            options: GenerateOptions {
                temperature: 0.2,
                num_predict: 64,
            },
        };
        assert_eq!(create_request(&request, &config), expected);
    }

    #[test]
    fn test_request_wire_format() {
        let request = CompletionRequest::new("hi");
        // 0.5 survives the f32 -> f64 widening exactly, unlike the
        // default temperature.
        let config =
            OllamaConfigBuilder::new().with_temperature(0.5).build();

        let serialized =
            serde_json::to_value(create_request(&request, &config)).unwrap();
        assert_eq!(
            serialized,
            json!({
                "model": "llama3",
                "prompt": "hi",
                "stream": false,
                "options": {
                    "temperature": 0.5,
                    "num_predict": 256
                }
            })
        );
    }

    #[test]
    fn test_parse_response() {
        let body = json!({
            "model": "llama3",
            "created_at": "2024-05-04T12:00:00Z",
            "response": "Thought: hmm\nFinal Answer: 42",
            "done": true
        });

        let resp: GenerateResponse =
            serde_json::from_value(body).unwrap();
        assert_eq!(resp.response, "Thought: hmm\nFinal Answer: 42");
        assert!(resp.done);
    }
}
