use crate::config::constant::DEFAULT_MIME_TYPE;
use crate::config::gemini::GeminiConfig;
use crate::entity::mockup::InlineImage;
use crate::utils::error::{upstream_error, MockupError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

#[async_trait]
pub trait ImageModel: Send + Sync {
    async fn generate_content(
        &self,
        image: &InlineImage,
        prompt: &str,
    ) -> Result<Vec<InlineImage>, MockupError>;
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(rename = "inlineData", alias = "inline_data")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType", alias = "mime_type")]
    mime_type: Option<String>,
    #[serde(default)]
    data: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Inline image parts of the first candidate, in response order.
    pub fn into_images(self) -> Vec<InlineImage> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.inline_data)
            .filter(|inline| !inline.data.is_empty())
            .map(|inline| InlineImage {
                mime_type: inline
                    .mime_type
                    .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
                data: inline.data,
            })
            .collect()
    }
}

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self, String> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.get_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| format!("Failed to build Gemini http client: {}", e))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        let model = self.model.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }

    fn request_body(image: &InlineImage, prompt: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": image.mime_type,
                            "data": image.data,
                        }
                    },
                    { "text": prompt }
                ]
            }],
            "generationConfig": {
                "responseModalities": ["IMAGE"]
            }
        })
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    async fn generate_content(
        &self,
        image: &InlineImage,
        prompt: &str,
    ) -> Result<Vec<InlineImage>, MockupError> {
        info!(
            "Sending {} ({} base64 chars) to model '{}'",
            image.mime_type,
            image.data.len(),
            self.model
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(image, prompt))
            .send()
            .await
            .map_err(|e| upstream_error("Failed to send Gemini request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            error!("Gemini responded with {}: {}", status, message);
            return Err(MockupError::UpstreamCallFailed(format!(
                "Gemini request failed with status {}: {}",
                status, message
            )));
        }

        let images = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| upstream_error("Failed to parse Gemini response as json", e))?
            .into_images();
        info!("Model '{}' returned {} image(s)", self.model, images.len());
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: Value) -> Vec<InlineImage> {
        serde_json::from_value::<GenerateContentResponse>(value)
            .unwrap()
            .into_images()
    }

    #[test]
    fn collects_every_inline_part() {
        let images = parse(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "here you go" },
                        { "inlineData": { "mimeType": "image/png", "data": "AAA=" } },
                        { "inline_data": { "mime_type": "image/webp", "data": "BBB=" } }
                    ]
                }
            }]
        }));
        assert_eq!(
            images,
            vec![
                InlineImage::new("image/png", "AAA="),
                InlineImage::new("image/webp", "BBB=")
            ]
        );
    }

    #[test]
    fn only_the_first_candidate_is_read() {
        let images = parse(json!({
            "candidates": [
                { "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "FIRST" } }] } },
                { "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "SECOND" } }] } }
            ]
        }));
        assert_eq!(images, vec![InlineImage::new("image/png", "FIRST")]);
    }

    #[test]
    fn empty_or_blocked_responses_yield_nothing() {
        assert!(parse(json!({})).is_empty());
        assert!(parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).is_empty());
        assert!(parse(json!({ "candidates": [{ "content": { "parts": [{ "text": "no" }] } }] })).is_empty());
    }

    #[test]
    fn missing_mime_type_defaults_to_jpeg() {
        let images = parse(json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "data": "CCC=" } }] } }]
        }));
        assert_eq!(images, vec![InlineImage::new("image/jpeg", "CCC=")]);
    }

    #[test]
    fn request_body_carries_image_then_prompt() {
        let body = GeminiClient::request_body(&InlineImage::new("image/png", "AAA="), "a prompt");
        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], json!("image/png"));
        assert_eq!(parts[0]["inlineData"]["data"], json!("AAA="));
        assert_eq!(parts[1]["text"], json!("a prompt"));
        assert_eq!(body["generationConfig"]["responseModalities"], json!(["IMAGE"]));
    }

    #[test]
    fn endpoint_prefixes_model_path() {
        let config = GeminiConfig {
            api_key: "key".into(),
            model: "gemini-2.5-flash-image".into(),
            api_base: "http://localhost:9".into(),
            timeout_secs: 5,
        };
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/models/gemini-2.5-flash-image:generateContent"
        );
    }
}
