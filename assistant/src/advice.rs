use haven_genai::{
    api::{Content, GenerateContentParameters, GenerationConfig, Part},
    GenerationError, GenerationResult, GenerativeModel,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// The structured guidance bundle produced for one scenario.
///
/// Every field is required by the response schema; any may be empty. The
/// bundle is immutable once received and held by the presentation layer
/// for the duration of one advice session.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAdvice {
    /// Simple, practical safety tips.
    pub tips: Vec<String>,
    /// Things to avoid in this situation.
    pub avoid: Vec<String>,
    /// Step-by-step instructions for staying safe.
    pub steps: Vec<String>,
    /// Short guide on what to do if things go wrong.
    pub emergency_guide: Vec<String>,
    /// Small reminders like keeping numbers saved or trusting instincts.
    pub reminders: Vec<String>,
}

const SYSTEM_INSTRUCTION: &str = "You are a warm, supportive Personal Safety Assistant. \
Your goal is to make the user feel empowered and safe, not fearful.";

/// Response schema for structured safety advice: an object with five
/// required array-of-string fields. Arrays may be empty but no field may
/// be omitted.
fn advice_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "tips": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of simple, practical safety tips."
            },
            "avoid": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Things to avoid in this situation."
            },
            "steps": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Step-by-step instructions for staying safe."
            },
            "emergencyGuide": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Short guide on what to do if things go wrong."
            },
            "reminders": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Small reminders like keeping numbers saved or trusting instincts."
            }
        },
        "required": ["tips", "avoid", "steps", "emergencyGuide", "reminders"]
    })
}

/// Fetches structured safety guidance for a described scenario.
pub struct AdvisoryClient {
    model: Arc<dyn GenerativeModel>,
}

impl AdvisoryClient {
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Ask the backend for guidance on a scenario.
    ///
    /// Fails on the first error, with no retry; the caller resets to idle
    /// and shows a notice.
    pub async fn get_safety_advice(&self, scenario: &str) -> GenerationResult<SafetyAdvice> {
        let scenario = scenario.trim();
        if scenario.is_empty() {
            return Err(GenerationError::InvalidInput(
                "scenario must not be empty".to_string(),
            ));
        }

        let prompt = format!(
            "The user is in the following scenario or location: \"{scenario}\".\n\n\
             Provide helpful, practical, easy-to-follow safety advice. \
             Explain things in a calm, reassuring tone, never scary or dramatic. \
             Keep the language human, warm, and supportive. \
             Ensure the advice is relevant to the exact place or scenario."
        );

        let params = GenerateContentParameters {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            system_instruction: Some(Content::system(vec![Part::text(SYSTEM_INSTRUCTION)])),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_json_schema: Some(advice_schema()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let response = self.model.generate(params).await?;
        let text = response
            .text()
            .ok_or(GenerationError::NoOutput(self.model.provider()))?;

        serde_json::from_str(&text)
            .map_err(|error| GenerationError::Schema(self.model.provider(), error.to_string()))
    }
}
