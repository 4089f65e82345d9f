use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::VideoSummaryService;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct SummaryRequest {
    contents: Vec<Content>,
}

pub struct GeminiSummaryClient {
    http: GeminiHttpClient,
}

impl GeminiSummaryClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                // Video processing on the provider side can take a while.
                Duration::from_secs(120),
                client,
            ),
        }
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiSummaryClient);

#[async_trait]
impl VideoSummaryService for GeminiSummaryClient {
    async fn summarize_video(&self, video_url: &str) -> Result<String> {
        let request = SummaryRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part::text(prompts::VIDEO_SUMMARY), Part::file_uri(video_url)],
            }],
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        response
            .first_text()
            .ok_or_else(|| Error::AiProvider("No text in Gemini summary response".to_string()))
    }
}
