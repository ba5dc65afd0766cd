pub mod botnoi;

use serde::Serialize;

use crate::error::GenerateError;

/// Voice parameters sent with every synthesis request.
#[derive(Debug, Clone, Serialize)]
pub struct Voice {
    pub speaker: String,
    pub volume: f64,
    pub speed: f64,
}

impl Default for Voice {
    fn default() -> Self {
        Self {
            speaker: "1".to_string(),
            volume: 1.0,
            speed: 1.0,
        }
    }
}

/// Seam between the pipeline and the remote API, so the orchestrator can be
/// exercised with fakes.
pub trait SynthesisClient {
    /// Ask the API to synthesize `text`, returning a one-shot download URL.
    /// A fresh URL is requested on every attempt; they are never reused.
    fn request_audio_url(&self, text: &str, voice: &Voice) -> Result<String, GenerateError>;

    /// Fetch the rendered clip from a URL returned by `request_audio_url`.
    fn download_audio(&self, audio_url: &str) -> Result<Vec<u8>, GenerateError>;
}
