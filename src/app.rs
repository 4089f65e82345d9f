//! Application orchestration for the three suite tools.

use crate::ai::{
    mime, CaptionService, GeminiCaptionClient, GeminiImageClient, GeminiSummaryClient,
    ImageGenerationService, VideoSummaryService,
};
use crate::models::{Config, GenerationResult};
use crate::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Holds the per-tool AI services and the session output directory.
///
/// Constructed once at startup from [`Config`]; there is no global client
/// state.
pub struct App {
    summary: Box<dyn VideoSummaryService>,
    caption: Box<dyn CaptionService>,
    image_gen: Box<dyn ImageGenerationService>,
    output_dir: PathBuf,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub summary: Box<dyn VideoSummaryService>,
    pub caption: Box<dyn CaptionService>,
    pub image_gen: Box<dyn ImageGenerationService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(services: AppServices, output_dir: PathBuf) -> Self {
        Self {
            summary: services.summary,
            caption: services.caption,
            image_gen: services.image_gen,
            output_dir,
        }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let date = Local::now().format("%Y-%m-%d").to_string();
        let session_id = Uuid::new_v4();
        let output_dir = PathBuf::from("output").join(format!("{}_{}", date, session_id));

        fs::create_dir_all(&output_dir)?;
        info!("Created output directory: {}", output_dir.display());

        // Reuse one HTTP connection pool across tool clients.
        let http_client = reqwest::Client::new();

        info!("Summary model: {}", config.summary_model);
        let summary = Box::new(GeminiSummaryClient::new_with_client(
            config.gemini_api_key.clone(),
            config.summary_model.clone(),
            http_client.clone(),
        ));

        info!("Caption model: {}", config.caption_model);
        let caption = Box::new(GeminiCaptionClient::new_with_client(
            config.gemini_api_key.clone(),
            config.caption_model.clone(),
            http_client.clone(),
        ));

        info!("Image model: {}", config.image_model);
        let image_gen = Box::new(GeminiImageClient::new_with_client(
            config.gemini_api_key.clone(),
            config.image_model.clone(),
            http_client,
        ));

        Ok(Self {
            summary,
            caption,
            image_gen,
            output_dir,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Summarize the YouTube video at `video_url`.
    pub async fn summarize_video(&self, video_url: &str) -> Result<String> {
        info!("Summarizing video: {}", video_url);
        self.summary.summarize_video(video_url).await
    }

    /// Caption the image file at `path`.
    pub async fn caption_image(&self, path: &Path) -> Result<String> {
        info!("Captioning image: {}", path.display());

        let image_bytes = fs::read(path)?;
        let mime_type = mime::detect_image_mime(&image_bytes);

        self.caption.caption_image(&image_bytes, mime_type).await
    }

    /// Run one image-generation request for `prompt`.
    ///
    /// Returns the normalized result; rendering is left to the caller.
    pub async fn generate_image(&self, prompt: &str) -> Result<GenerationResult> {
        info!("Generating image for prompt: {}", prompt);
        self.image_gen.generate_image(prompt).await
    }
}
