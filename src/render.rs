//! Rendering of mixed-modality generation results.
//!
//! Turns a [`GenerationResult`] into an ordered stream of display actions
//! for the presentation layer. The transform is pure: it performs no I/O,
//! holds no state between invocations, and is safe to run from unrelated
//! request contexts.

use crate::models::{GenerationResult, ResponsePart};
use crate::{Error, Result};
use image::DynamicImage;

/// One instruction to the presentation layer, decoupled from any UI toolkit.
#[derive(Debug)]
pub enum DisplayAction {
    ShowText(String),
    ShowImage(DynamicImage),
}

/// A single image part that could not be decoded.
#[derive(Debug)]
pub struct ImageDecodeFailure {
    /// Index of the failed part within the rendered candidate.
    pub part_index: usize,
    pub source: image::ImageError,
}

impl std::fmt::Display for ImageDecodeFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "part {} could not be decoded as an image: {}",
            self.part_index, self.source
        )
    }
}

/// Lazy, finite, non-restartable stream of display actions.
///
/// Image parts are decoded as the stream is advanced. A part that fails to
/// decode is skipped and its error recorded; decode failures never abort the
/// remaining parts. Callers read [`ActionStream::decode_failures`] after
/// consuming the stream to report errors once, aggregated.
#[derive(Debug)]
pub struct ActionStream {
    parts: std::iter::Enumerate<std::vec::IntoIter<ResponsePart>>,
    failures: Vec<ImageDecodeFailure>,
}

impl ActionStream {
    fn new(parts: Vec<ResponsePart>) -> Self {
        Self {
            parts: parts.into_iter().enumerate(),
            failures: Vec::new(),
        }
    }

    pub fn decode_failures(&self) -> &[ImageDecodeFailure] {
        &self.failures
    }

    pub fn into_decode_failures(self) -> Vec<ImageDecodeFailure> {
        self.failures
    }
}

impl Iterator for ActionStream {
    type Item = DisplayAction;

    fn next(&mut self) -> Option<DisplayAction> {
        for (index, part) in self.parts.by_ref() {
            match part {
                ResponsePart::Text(text) => return Some(DisplayAction::ShowText(text)),
                ResponsePart::Image { bytes, mime_type } => {
                    match image::load_from_memory(&bytes) {
                        Ok(decoded) => return Some(DisplayAction::ShowImage(decoded)),
                        Err(source) => {
                            tracing::warn!(
                                "Skipping undecodable image part {} ({}): {}",
                                index,
                                mime_type,
                                source
                            );
                            self.failures.push(ImageDecodeFailure {
                                part_index: index,
                                source,
                            });
                        }
                    }
                }
            }
        }
        None
    }
}

/// Render the first candidate of a generation result.
///
/// Consumes the result. Fails with [`Error::NoCandidates`] when the result
/// carries no candidate at all; an empty parts list is not an error and
/// yields an empty stream.
pub fn render(result: GenerationResult) -> Result<ActionStream> {
    let candidate = result
        .candidates
        .into_iter()
        .next()
        .ok_or(Error::NoCandidates)?;

    Ok(ActionStream::new(candidate.parts))
}
