use async_trait::async_trait;
use haven_genai::{
    api::{GenerateContentParameters, GenerateContentResponse},
    GenerationError, GenerationResult, GenerativeModel,
};
use serde_json::{json, Value};
use std::{collections::VecDeque, sync::Mutex};

/// Canned backend: hands out queued results in order and records the
/// parameters of every request.
pub struct StubModel {
    responses: Mutex<VecDeque<GenerationResult<GenerateContentResponse>>>,
    pub requests: Mutex<Vec<GenerateContentParameters>>,
}

impl StubModel {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn reply(self, response: GenerateContentResponse) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    #[must_use]
    pub fn fail(self, error: GenerationError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }
}

#[async_trait]
impl GenerativeModel for StubModel {
    fn provider(&self) -> &'static str {
        "stub"
    }

    fn model_id(&self) -> String {
        "stub-model".to_string()
    }

    async fn generate(
        &self,
        params: GenerateContentParameters,
    ) -> GenerationResult<GenerateContentResponse> {
        self.requests.lock().unwrap().push(params);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::NoOutput("stub")))
    }
}

/// A response whose first candidate carries a single text part.
pub fn text_response(text: &str) -> GenerateContentResponse {
    from_json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    }))
}

pub fn from_json(value: Value) -> GenerateContentResponse {
    serde_json::from_value(value).expect("valid response JSON")
}
