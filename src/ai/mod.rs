//! AI service integration for the three suite tools
//!
//! One trait per capability so implementations can be swapped per tool and
//! mocked in tests.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{GeminiCaptionClient, GeminiImageClient, GeminiSummaryClient};
pub use mock::{MockCaptionClient, MockImageGenerationClient, MockSummaryClient};

use crate::models::GenerationResult;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VideoSummaryService: Send + Sync {
    async fn summarize_video(&self, video_url: &str) -> Result<String>;
}

#[async_trait]
pub trait CaptionService: Send + Sync {
    async fn caption_image(&self, image_bytes: &[u8], mime_type: &str) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, prompt: &str) -> Result<GenerationResult>;
}
