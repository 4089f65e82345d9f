use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use image::ImageFormat;
use multimodal_suite::app::App;
use multimodal_suite::render::{render, DisplayAction};
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "multimodal-suite")]
#[command(about = "Summarize videos, caption images, and generate images with Gemini")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize a YouTube video
    Summarize {
        /// YouTube video URL
        url: String,
    },
    /// Generate a caption for a local image
    Caption {
        /// Path to a PNG or JPEG image
        image: PathBuf,
    },
    /// Generate an image from a text prompt
    Generate {
        /// Description of the image to generate
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "multimodal_suite=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Summarize { url } => {
            if url.trim().is_empty() {
                bail!("No YouTube URL given");
            }
            let summary = app.summarize_video(&url).await?;
            println!("{}", summary);
        }
        Command::Caption { image } => {
            if !image.is_file() {
                bail!("Image file not found: {}", image.display());
            }
            let caption = app.caption_image(&image).await?;
            println!("{}", caption);
        }
        Command::Generate { prompt } => {
            if prompt.trim().is_empty() {
                bail!("No prompt given");
            }
            let result = app.generate_image(&prompt).await?;

            let mut stream = render(result)?;
            let mut image_count = 0usize;
            let mut rendered = 0usize;

            for action in stream.by_ref() {
                match action {
                    DisplayAction::ShowText(text) => println!("{}", text),
                    DisplayAction::ShowImage(decoded) => {
                        image_count += 1;
                        let path = app
                            .output_dir()
                            .join(format!("generated_{:02}.png", image_count));
                        decoded
                            .save_with_format(&path, ImageFormat::Png)
                            .with_context(|| format!("Failed to save {}", path.display()))?;
                        info!("Saved image to {}", path.display());
                        println!("[image saved: {}]", path.display());
                    }
                }
                rendered += 1;
            }

            let failures = stream.into_decode_failures();
            for failure in &failures {
                warn!("Image decode failure: {}", failure);
            }
            if rendered == 0 && !failures.is_empty() {
                bail!("No part of the generation result could be rendered");
            }
        }
    }

    Ok(())
}
