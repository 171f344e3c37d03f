use crate::{
    api::{GenerateContentParameters, GenerateContentResponse},
    GenerationError, GenerationResult,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

const PROVIDER: &str = "google";

/// A generative backend able to serve `generate_content` requests.
///
/// The application depends on this trait rather than the HTTP client so
/// tests can substitute a canned backend.
#[async_trait::async_trait]
pub trait GenerativeModel: Send + Sync {
    fn provider(&self) -> &'static str;
    fn model_id(&self) -> String;
    async fn generate(
        &self,
        params: GenerateContentParameters,
    ) -> GenerationResult<GenerateContentResponse>;
}

pub struct GeminiModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GeminiModelOptions {
    pub api_key: String,
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl GeminiModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: GeminiModelOptions) -> Self {
        let GeminiModelOptions {
            api_key,
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> GenerationResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                GenerationError::InvalidInput(format!("Invalid header name '{key}': {error}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                GenerationError::InvalidInput(format!("Invalid header value for '{key}': {error}"))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(
        &self,
        mut params: GenerateContentParameters,
    ) -> GenerationResult<GenerateContentResponse> {
        params.model = self.model_id.clone();

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_id, self.api_key
        );

        let headers = self.request_headers()?;
        tracing::debug!(provider = PROVIDER, model_id = %self.model_id, "generate_content");
        send_json(&self.client, &url, &params, headers).await
    }
}

/// Create a JSON request, parse the response.
/// Throws error on non OK status code.
async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
) -> GenerationResult<R> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    if response.status().is_client_error() {
        Err(GenerationError::StatusCode(
            response.status(),
            response.text().await.unwrap_or_default(),
        ))
    } else {
        Ok(response.json::<R>().await?)
    }
}
