//! Shared Gemini payload types used across the summary, caption, and image
//! generation modules, plus normalization into the domain model.

use crate::models::{Candidate as ResultCandidate, GenerationResult, ResponsePart};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// One wire-level content part. Exactly one field is expected to be
/// populated; classification happens on which field that is, never on the
/// payload contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: base64_data.into(),
            }),
            ..Default::default()
        }
    }

    pub fn file_uri(uri: impl Into<String>) -> Self {
        Self {
            file_data: Some(FileData {
                file_uri: uri.into(),
            }),
            ..Default::default()
        }
    }
}

/// Base64 inline payload used for image requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Remote file reference, used for YouTube URLs in summary requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub file_uri: String,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Extracts the first text part of the first candidate, if any.
    pub fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.text.clone()))
    }

    /// Normalizes the wire payload into the provider-agnostic
    /// [`GenerationResult`].
    ///
    /// Fails with [`Error::MalformedResponse`] when the payload carries no
    /// candidate at all. Parts with neither text nor inline data are
    /// skipped, as are inline parts whose base64 payload does not decode;
    /// neither aborts normalization of the remaining parts.
    pub fn into_generation_result(self) -> Result<GenerationResult> {
        if self.candidates.is_empty() {
            return Err(Error::MalformedResponse(
                "no candidates in provider response".to_string(),
            ));
        }

        let candidates = self
            .candidates
            .into_iter()
            .map(|candidate| ResultCandidate {
                parts: candidate
                    .content
                    .parts
                    .into_iter()
                    .enumerate()
                    .filter_map(normalize_part)
                    .collect(),
            })
            .collect();

        Ok(GenerationResult { candidates })
    }
}

fn normalize_part((index, part): (usize, Part)) -> Option<ResponsePart> {
    if let Some(text) = part.text {
        return Some(ResponsePart::Text(text));
    }

    if let Some(inline) = part.inline_data {
        use base64::Engine as _;
        return match base64::engine::general_purpose::STANDARD.decode(&inline.data) {
            Ok(bytes) => Some(ResponsePart::Image {
                bytes,
                mime_type: inline.mime_type,
            }),
            Err(e) => {
                tracing::warn!("Skipping inline part {} with invalid base64: {}", index, e);
                None
            }
        };
    }

    tracing::debug!("Skipping response part {} with no text or inline data", index);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn response_with_parts(parts: Vec<Part>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content { role: None, parts },
            }],
        }
    }

    #[test]
    fn test_part_serializes_only_populated_field() {
        let json = serde_json::to_value(Part::text("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hi" }));

        let json = serde_json::to_value(Part::file_uri("https://youtu.be/abc")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fileData": { "fileUri": "https://youtu.be/abc" } })
        );
    }

    #[test]
    fn test_deserialize_inline_data_part() {
        let part: Part = serde_json::from_value(serde_json::json!({
            "inlineData": { "mimeType": "image/png", "data": "AAEC" }
        }))
        .unwrap();

        let inline = part.inline_data.unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert!(part.text.is_none());
    }

    #[test]
    fn test_normalize_classifies_on_populated_field() {
        let b64 = base64::engine::general_purpose::STANDARD.encode([1u8, 2, 3]);
        let response =
            response_with_parts(vec![Part::text("hello"), Part::inline_data("image/png", b64)]);

        let result = response.into_generation_result().unwrap();
        let parts = &result.candidates[0].parts;

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], crate::models::ResponsePart::Text("hello".to_string()));
        assert_eq!(
            parts[1],
            crate::models::ResponsePart::Image {
                bytes: vec![1, 2, 3],
                mime_type: "image/png".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_skips_empty_parts() {
        let response = response_with_parts(vec![
            Part::text("a"),
            Part::default(),
            Part::text("b"),
        ]);

        let result = response.into_generation_result().unwrap();
        assert_eq!(result.candidates[0].parts.len(), 2);
    }

    #[test]
    fn test_normalize_skips_invalid_base64() {
        let response = response_with_parts(vec![
            Part::inline_data("image/png", "!!!not-base64!!!"),
            Part::text("still here"),
        ]);

        let result = response.into_generation_result().unwrap();
        let parts = &result.candidates[0].parts;
        assert_eq!(parts.len(), 1);
        assert_eq!(
            parts[0],
            crate::models::ResponsePart::Text("still here".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_empty_candidates() {
        let response = GenerateContentResponse { candidates: vec![] };
        let err = response.into_generation_result().unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_candidates_field_deserializes_as_empty() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
