//! Data models and configuration
//!
//! Defines the provider-agnostic shape of a mixed-modality generation result
//! and the application configuration loaded from the environment.

/// The outcome of one image-generation request, already detached from any
/// provider wire format.
///
/// Created fresh per request, consumed once by the renderer, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub candidates: Vec<Candidate>,
}

/// One generated alternative. Part order is significant and must be
/// preserved all the way to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub parts: Vec<ResponsePart>,
}

/// One atomic unit of a candidate's content.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePart {
    Text(String),
    Image { bytes: Vec<u8>, mime_type: String },
}

impl GenerationResult {
    pub fn single_candidate(parts: Vec<ResponsePart>) -> Self {
        Self {
            candidates: vec![Candidate { parts }],
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub summary_model: String,
    pub caption_model: String,
    pub image_model: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            summary_model: std::env::var("SUMMARY_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            caption_model: std::env::var("CAPTION_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            image_model: std::env::var("IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-exp-image-generation".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_candidate_constructor() {
        let result = GenerationResult::single_candidate(vec![
            ResponsePart::Text("hello".to_string()),
            ResponsePart::Image {
                bytes: vec![0x89, 0x50],
                mime_type: "image/png".to_string(),
            },
        ]);

        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].parts.len(), 2);
        assert_eq!(
            result.candidates[0].parts[0],
            ResponsePart::Text("hello".to_string())
        );
    }
}
