use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;

pub const TOKEN_ENV_VAR: &str = "BOTNOI_TOKEN";

const API_URL: &str = "https://api-voice.botnoi.ai/openapi/v1/generate_audio";
const SOURCE_DIR: &str = "data/audio";
const DEST_DIR: &str = "tone-cheatsheet/public/audio";

/// Runtime knobs for one invocation. Passed explicitly so tests can point the
/// pipeline at temporary directories and a mock API.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub max_attempts: u32,
    pub backoff_base: Duration,
    pub request_timeout: Duration,
    pub download_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            source_dir: PathBuf::from(SOURCE_DIR),
            dest_dir: PathBuf::from(DEST_DIR),
            max_attempts: 3,
            backoff_base: Duration::from_secs(2),
            request_timeout: Duration::from_secs(20),
            download_timeout: Duration::from_secs(30),
        }
    }
}

impl Settings {
    pub fn with_dirs(source_dir: Option<PathBuf>, dest_dir: Option<PathBuf>) -> Self {
        let mut settings = Self::default();
        if let Some(dir) = source_dir {
            settings.source_dir = dir;
        }
        if let Some(dir) = dest_dir {
            settings.dest_dir = dir;
        }
        settings
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.source_dir)?;
        fs::create_dir_all(&self.dest_dir)?;
        Ok(())
    }
}

/// Botnoi API credential. Read exclusively from the environment; the raw
/// value is sent only as a request header and must never be logged.
#[derive(Clone)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn from_env() -> anyhow::Result<Self> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => Ok(Self(value)),
            _ => bail!("{TOKEN_ENV_VAR} is not set; aborting"),
        }
    }

    pub fn header_value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(redacted)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_exposes_the_token() {
        let token = ApiToken("super-secret".to_string());
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn defaults_match_the_published_layout() {
        let settings = Settings::default();
        assert_eq!(settings.source_dir, PathBuf::from("data/audio"));
        assert_eq!(
            settings.dest_dir,
            PathBuf::from("tone-cheatsheet/public/audio")
        );
        assert_eq!(settings.max_attempts, 3);
    }
}
