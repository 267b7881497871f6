use async_trait::async_trait;
use reqwest::{Client, header};
use serde::{Serialize, Deserialize};

use crate::config::Config;
use crate::error::PlaylistError;
use crate::mood::Mood;
use crate::upstream::SentimentClassifier;

const UPSTREAM: &str = "sentiment inference";

#[derive(Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub inputs: String
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ClassificationLabel {
    pub label: String,
    pub score: f64
}

pub struct HuggingFaceClient {
    client: Client,
    api_token: String,
    url: String,
}

impl HuggingFaceClient {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_token: config.hf_api_token.clone(),
            url: format!("{}/models/{}", config.hf_inference_url, config.hf_model),
        }
    }

    pub async fn top_label(&self, text: &str) -> Result<String, PlaylistError> {
        let request_body = ClassificationRequest {
            inputs: text.to_string()
        };
        let stringified_request_body = serde_json::to_string(&request_body)?;

        let mut request_headers = header::HeaderMap::new();
        request_headers.insert("Authorization", header::HeaderValue::from_str(&format!("Bearer {}", self.api_token))?);
        request_headers.insert("Content-Type", header::HeaderValue::from_static("application/json"));

        let response = self.client
            .post(&self.url)
            .headers(request_headers)
            .body(stringified_request_body)
            .send()
            .await?;

        let status = response.status();
        let stringified_response_body = response.text().await?;
        log::debug!("stringified_response_body = {stringified_response_body}");

        if !status.is_success() {
            return Err(PlaylistError::Inference {
                status: status.as_u16(),
                body: stringified_response_body,
            });
        }

        parse_top_label(&stringified_response_body)
    }
}

/// Label of the first entry of the first result list.
pub fn parse_top_label(body: &str) -> Result<String, PlaylistError> {
    let results: Vec<Vec<ClassificationLabel>> = serde_json::from_str(body)
        .map_err(|err| PlaylistError::shape(UPSTREAM, err.to_string()))?;
    let first = results
        .into_iter()
        .next()
        .ok_or_else(|| PlaylistError::shape(UPSTREAM, "empty result list"))?;
    let top = first
        .into_iter()
        .next()
        .ok_or_else(|| PlaylistError::shape(UPSTREAM, "first result has no labels"))?;
    Ok(top.label)
}

#[async_trait]
impl SentimentClassifier for HuggingFaceClient {
    async fn classify(&self, text: &str) -> Result<Mood, PlaylistError> {
        let label = self.top_label(text).await?;
        log::debug!("label = {label}");
        Ok(Mood::from_sentiment_label(&label))
    }
}
