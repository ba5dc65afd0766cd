use std::path::PathBuf;
use std::thread;

use crate::config::Settings;
use crate::error::GenerateError;
use crate::publish;
use crate::tts::{SynthesisClient, Voice};
use crate::vocab::VocabItem;

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generated: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub copied: Vec<String>,
}

impl BatchReport {
    /// 0 when every item generated; 2 when any generation failed. Copy
    /// failures are logged but do not change the code.
    pub fn exit_code(&self) -> u8 {
        if self.failed.is_empty() {
            0
        } else {
            2
        }
    }
}

/// Drive one item through request -> download -> verified write, retrying the
/// whole sequence on any failure. Backoff grows linearly with the attempt
/// index; no sleep follows the final attempt.
pub fn generate_one(
    client: &dyn SynthesisClient,
    settings: &Settings,
    item: &VocabItem,
    voice: &Voice,
) -> Result<PathBuf, GenerateError> {
    let target = settings.source_dir.join(&item.filename);
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match attempt_once(client, &target, item, voice) {
            Ok(()) => return Ok(target),
            Err(err) if attempt < settings.max_attempts => {
                tracing::warn!(
                    text = %item.text,
                    filename = %item.filename,
                    attempt,
                    max_attempts = settings.max_attempts,
                    error = %err,
                    "attempt failed; backing off"
                );
                thread::sleep(settings.backoff_base * attempt);
            }
            Err(err) => {
                return Err(GenerateError::Exhausted {
                    attempts: attempt,
                    last: Box::new(err),
                })
            }
        }
    }
}

fn attempt_once(
    client: &dyn SynthesisClient,
    target: &std::path::Path,
    item: &VocabItem,
    voice: &Voice,
) -> Result<(), GenerateError> {
    let audio_url = client.request_audio_url(&item.text, voice)?;
    let bytes = client.download_audio(&audio_url)?;
    publish::write_verified(target, &bytes)
}

/// Sequential fold over the vocabulary: generate everything, then mirror the
/// successes. One item's failure never aborts the rest.
pub fn run_batch(
    client: &dyn SynthesisClient,
    settings: &Settings,
    vocab: &[VocabItem],
    voice: &Voice,
) -> BatchReport {
    let mut report = BatchReport::default();

    for item in vocab {
        match generate_one(client, settings, item, voice) {
            Ok(path) => {
                tracing::info!(text = %item.text, path = %path.display(), "generated");
                report.generated.push(item.filename.clone());
            }
            Err(err) => {
                tracing::error!(text = %item.text, filename = %item.filename, error = %err, "generation failed");
                report.failed.push((item.filename.clone(), err.to_string()));
            }
        }
    }

    for filename in &report.generated {
        match publish::copy_to_public(settings, filename) {
            Ok(_) => report.copied.push(filename.clone()),
            Err(err) => {
                tracing::warn!(filename = %filename, error = %err, "copy to published dir failed");
            }
        }
    }

    report
}
