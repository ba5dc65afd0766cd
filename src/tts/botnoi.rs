use reqwest::blocking::Client;
use serde_json::{json, Value};

use crate::config::{ApiToken, Settings};
use crate::error::GenerateError;

use super::{SynthesisClient, Voice};

const TOKEN_HEADER: &str = "botnoi-token";

/// Blocking client for the Botnoi generate_audio endpoint. One instance is
/// shared across a whole run for connection reuse; it holds no per-item state.
pub struct BotnoiClient {
    http: Client,
    api_url: String,
    token: ApiToken,
    request_timeout: std::time::Duration,
    download_timeout: std::time::Duration,
}

impl BotnoiClient {
    pub fn new(settings: &Settings, token: ApiToken) -> anyhow::Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            token,
            request_timeout: settings.request_timeout,
            download_timeout: settings.download_timeout,
        })
    }

    fn payload(text: &str, voice: &Voice) -> Value {
        json!({
            "text": text,
            "speaker": voice.speaker,
            "volume": voice.volume,
            "speed": voice.speed,
            "type_media": "mp3",
            "save_file": "true",
            "language": "th",
            "page": "user",
        })
    }
}

impl SynthesisClient for BotnoiClient {
    fn request_audio_url(&self, text: &str, voice: &Voice) -> Result<String, GenerateError> {
        let response = self
            .http
            .post(&self.api_url)
            .header(TOKEN_HEADER, self.token.header_value())
            .timeout(self.request_timeout)
            .json(&Self::payload(text, voice))
            .send()
            .map_err(|err| GenerateError::RequestFailed {
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::RequestFailed {
                reason: format!("status {status}"),
            });
        }

        let body: Value = response
            .json()
            .map_err(|err| GenerateError::MalformedResponse {
                reason: err.to_string(),
            })?;

        match body.get("audio_url").and_then(Value::as_str) {
            Some(url) if !url.is_empty() => Ok(url.to_string()),
            _ => Err(GenerateError::MissingAudioUrl),
        }
    }

    fn download_audio(&self, audio_url: &str) -> Result<Vec<u8>, GenerateError> {
        let response = self
            .http
            .get(audio_url)
            .timeout(self.download_timeout)
            .send()
            .map_err(|err| GenerateError::DownloadFailed {
                reason: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerateError::DownloadFailed {
                reason: format!("status {status}"),
            });
        }

        let bytes = response
            .bytes()
            .map_err(|err| GenerateError::DownloadFailed {
                reason: err.to_string(),
            })?;
        Ok(bytes.to_vec())
    }
}
