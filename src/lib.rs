//! Multimodal Gemini suite - video summarization, image captioning, and
//! image generation from the command line
//!
//! Each tool is a single request/response round trip against Gemini's
//! `generateContent` API. Mixed text/image generation results are normalized
//! into a provider-agnostic model and turned into an ordered stream of
//! display actions for the presentation layer.

pub mod ai;
pub mod app;
pub mod error;
pub mod models;
pub mod prompts;
pub mod render;

pub use error::{Error, Result};
