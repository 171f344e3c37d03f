use crate::api::{Content, GenerateContentResponse, GroundingChunk, Part};

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Content {
    /// Content authored by the user.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: Some(parts),
        }
    }

    /// System instruction content.
    pub fn system(parts: Vec<Part>) -> Self {
        Self {
            role: Some("system".to_string()),
            parts: Some(parts),
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate. `None` when the
    /// response carries no candidate or no non-empty text.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let parts = self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?;
        let text: String = parts.iter().filter_map(|part| part.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Grounding references of the first candidate; empty when the
    /// response carries no grounding metadata.
    #[must_use]
    pub fn grounding_chunks(&self) -> &[GroundingChunk] {
        self.candidates
            .as_ref()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .and_then(|metadata| metadata.grounding_chunks.as_deref())
            .unwrap_or_default()
    }
}
