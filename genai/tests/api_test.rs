use haven_genai::api::{
    Content, FinishReason, GenerateContentParameters, GenerateContentResponse, GenerationConfig,
    GoogleMaps, LatLng, Part, RetrievalConfig, Tool, ToolConfig,
};
use serde_json::json;

#[test]
fn request_serializes_camel_case() {
    let params = GenerateContentParameters {
        model: "gemini-2.5-flash".to_string(),
        contents: vec![Content::user(vec![Part::text("hello")])],
        tools: Some(vec![Tool {
            google_maps: Some(GoogleMaps::default()),
            ..Default::default()
        }]),
        tool_config: Some(ToolConfig {
            retrieval_config: Some(RetrievalConfig {
                lat_lng: Some(LatLng {
                    latitude: 1.5,
                    longitude: -2.0,
                }),
            }),
        }),
        system_instruction: Some(Content::system(vec![Part::text("be calm")])),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_json_schema: Some(json!({ "type": "object" })),
            ..Default::default()
        }),
    };

    let value = serde_json::to_value(&params).unwrap();

    assert_eq!(value["tools"][0]["googleMaps"], json!({}));
    assert_eq!(
        value["toolConfig"]["retrievalConfig"]["latLng"],
        json!({ "latitude": 1.5, "longitude": -2.0 })
    );
    assert_eq!(
        value["generationConfig"]["responseMimeType"],
        json!("application/json")
    );
    assert_eq!(value["systemInstruction"]["role"], json!("system"));
    assert_eq!(value["contents"][0]["parts"][0]["text"], json!("hello"));
}

#[test]
fn omitted_options_stay_off_the_wire() {
    let params = GenerateContentParameters {
        model: "gemini-2.5-flash".to_string(),
        contents: vec![Content::user(vec![Part::text("hello")])],
        ..Default::default()
    };

    let value = serde_json::to_value(&params).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("tools"));
    assert!(!object.contains_key("toolConfig"));
    assert!(!object.contains_key("systemInstruction"));
    assert!(!object.contains_key("generationConfig"));
}

#[test]
fn response_text_concatenates_first_candidate_parts() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": "Stay " }, { "text": "calm." }]
            },
            "finishReason": "STOP"
        }]
    }))
    .unwrap();

    assert_eq!(response.text().as_deref(), Some("Stay calm."));
    assert_eq!(
        response.candidates.as_ref().unwrap()[0].finish_reason,
        Some(FinishReason::Stop)
    );
}

#[test]
fn empty_response_has_no_text_and_no_chunks() {
    let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();

    assert!(response.text().is_none());
    assert!(response.grounding_chunks().is_empty());
}

#[test]
fn parses_grounding_metadata() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "narrative" }] },
            "groundingMetadata": {
                "groundingChunks": [
                    { "maps": { "title": "Central Hospital", "uri": "https://maps.example/h1" } },
                    { "web": { "title": "City Police", "uri": "https://police.example" } }
                ]
            }
        }],
        "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 34, "totalTokenCount": 46 }
    }))
    .unwrap();

    let chunks = response.grounding_chunks();
    assert_eq!(chunks.len(), 2);
    assert_eq!(
        chunks[0].maps.as_ref().unwrap().title.as_deref(),
        Some("Central Hospital")
    );
    assert_eq!(
        chunks[1].web.as_ref().unwrap().uri.as_deref(),
        Some("https://police.example")
    );
    assert_eq!(
        response.usage_metadata.unwrap().total_token_count,
        Some(46)
    );
}
