use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::CaptionService;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct CaptionRequest {
    contents: Vec<Content>,
}

pub struct GeminiCaptionClient {
    http: GeminiHttpClient,
}

impl GeminiCaptionClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiCaptionClient);

#[async_trait]
impl CaptionService for GeminiCaptionClient {
    async fn caption_image(&self, image_bytes: &[u8], mime_type: &str) -> Result<String> {
        use base64::Engine as _;
        let encoded = base64::engine::general_purpose::STANDARD.encode(image_bytes);

        let request = CaptionRequest {
            contents: vec![Content {
                role: None,
                parts: vec![
                    Part::text(prompts::IMAGE_CAPTION),
                    Part::inline_data(mime_type, encoded),
                ],
            }],
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        response
            .first_text()
            .ok_or_else(|| Error::AiProvider("No text in Gemini caption response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use wiremock::matchers::body_string_contains;
    use wiremock::{MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-2.0-flash";

    fn make_client(server: &MockServer) -> GeminiCaptionClient {
        GeminiCaptionClient::new("test-key".to_string(), DEFAULT_MODEL.to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_caption_image_parses_response() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "A cat surfing a rainbow" }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let caption = make_client(&server)
            .caption_image(&[0x89, 0x50, 0x4E, 0x47], "image/png")
            .await
            .unwrap();

        assert_eq!(caption, "A cat surfing a rainbow");
    }

    #[tokio::test]
    async fn test_request_carries_base64_inline_data() {
        let server = MockServer::start().await;

        use base64::Engine as _;
        let bytes = [0xFF, 0xD8, 0xFF];
        let expected_b64 = base64::engine::general_purpose::STANDARD.encode(bytes);

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("\"mimeType\":\"image/jpeg\""))
            .and(body_string_contains(&format!(
                "\"data\":\"{}\"",
                expected_b64
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "caption" }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        make_client(&server)
            .caption_image(&bytes, "image/jpeg")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_text_is_an_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{ "content": { "parts": [] } }]
            })))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .caption_image(&[0x00], "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}
