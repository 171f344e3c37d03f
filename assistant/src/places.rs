use crate::{location::LocationQuery, phone::PhoneHeuristic};
use haven_genai::{
    api::{
        Content, GenerateContentParameters, GoogleMaps, GroundingChunk, GroundingSource, LatLng,
        Part, RetrievalConfig, Tool, ToolConfig,
    },
    GenerativeModel,
};
use serde::Serialize;
use std::sync::Arc;

/// A candidate refuge sourced from the backend's grounding references.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SafePlace {
    pub title: String,
    /// Identity of the place; later duplicates of the same uri are
    /// dropped.
    pub uri: String,
    /// Best-effort, scanned from the narrative; may be absent or wrong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

const BASE_PROMPT: &str = "Find the nearest police stations, hospitals, fire stations, or \
24-hour public safe zones (like open convenience stores, lobbies, or busy areas) where \
someone can go for safety. In your text response, please list the places and explicitly \
mention the phone number for each place if available (e.g., 'Phone: 555-1234').";

/// Looks up nearby safe places through the backend's maps grounding.
pub struct SafePlaceFinder {
    model: Arc<dyn GenerativeModel>,
    heuristic: PhoneHeuristic,
}

impl SafePlaceFinder {
    #[must_use]
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            model,
            heuristic: PhoneHeuristic::default(),
        }
    }

    /// Find safe places near a location.
    ///
    /// Never fails: any backend or parsing problem is logged and yields an
    /// empty list, which the caller renders as "nothing found".
    pub async fn find_safe_places(&self, location: &LocationQuery) -> Vec<SafePlace> {
        let mut prompt = BASE_PROMPT.to_string();
        let mut tool_config = None;

        match location {
            LocationQuery::Address(address) => {
                prompt.push_str(&format!(
                    " The user is currently located at or near: \"{address}\". \
                     Find safe places near this location."
                ));
            }
            LocationQuery::Coordinates(coordinates) => {
                prompt.push_str(" Search near the user's current coordinates.");
                tool_config = Some(ToolConfig {
                    retrieval_config: Some(RetrievalConfig {
                        lat_lng: Some(LatLng {
                            latitude: coordinates.latitude,
                            longitude: coordinates.longitude,
                        }),
                    }),
                });
            }
        }

        let params = GenerateContentParameters {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            tools: Some(vec![Tool {
                google_maps: Some(GoogleMaps::default()),
                ..Default::default()
            }]),
            tool_config,
            ..Default::default()
        };

        let response = match self.model.generate(params).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%error, "safe place lookup failed");
                return Vec::new();
            }
        };

        let mut places = collect_candidates(response.grounding_chunks());

        // Enrich the structured candidates with phone numbers stated in
        // the narrative. Each scan is isolated; one odd title cannot spoil
        // the rest.
        if let Some(narrative) = response.text() {
            for place in &mut places {
                place.phone_number = self.heuristic.extract_near(&narrative, &place.title);
            }
        }

        places
    }
}

/// Collect titled, linked references from both the web and maps sides of
/// every grounding chunk, in discovery order, dropping later duplicates of
/// the same uri.
fn collect_candidates(chunks: &[GroundingChunk]) -> Vec<SafePlace> {
    let mut places: Vec<SafePlace> = Vec::new();
    for chunk in chunks {
        for source in [chunk.web.as_ref(), chunk.maps.as_ref()]
            .into_iter()
            .flatten()
        {
            let GroundingSource {
                title: Some(title),
                uri: Some(uri),
            } = source
            else {
                continue;
            };
            if places.iter().any(|place| &place.uri == uri) {
                continue;
            }
            places.push(SafePlace {
                title: title.clone(),
                uri: uri.clone(),
                phone_number: None,
            });
        }
    }
    places
}
