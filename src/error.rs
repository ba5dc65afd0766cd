use std::path::PathBuf;

use thiserror::Error;

/// One variant per failure point in the generate-then-publish pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("synthesis request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("synthesis response was not valid JSON: {reason}")]
    MalformedResponse { reason: String },

    #[error("synthesis response carried no audio_url")]
    MissingAudioUrl,

    #[error("audio download failed: {reason}")]
    DownloadFailed { reason: String },

    #[error("file empty after write: {path}")]
    EmptyWriteResult { path: PathBuf },

    #[error("source missing or empty: {path}")]
    SourceMissingOrEmpty { path: PathBuf },

    #[error("dest missing or empty after copy: {path}")]
    DestMissingOrEmpty { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<GenerateError>,
    },
}
