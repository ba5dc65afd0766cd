use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tone_audio::config::Settings;
use tone_audio::error::GenerateError;
use tone_audio::generate;
use tone_audio::tts::{SynthesisClient, Voice};
use tone_audio::vocab::VocabItem;

/// Scripted stand-in for the remote API. Fails the first `fail_first`
/// synthesis requests, then succeeds; texts listed in `missing_url_for`
/// always come back without an audio_url.
struct FakeClient {
    fail_first: usize,
    missing_url_for: Vec<String>,
    payload: Vec<u8>,
    requests: AtomicUsize,
    downloads: AtomicUsize,
}

impl FakeClient {
    fn new(fail_first: usize, payload: &[u8]) -> Self {
        Self {
            fail_first,
            missing_url_for: Vec::new(),
            payload: payload.to_vec(),
            requests: AtomicUsize::new(0),
            downloads: AtomicUsize::new(0),
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl SynthesisClient for FakeClient {
    fn request_audio_url(&self, text: &str, _voice: &Voice) -> Result<String, GenerateError> {
        let n = self.requests.fetch_add(1, Ordering::SeqCst) + 1;
        if self.missing_url_for.iter().any(|t| t == text) {
            return Err(GenerateError::MissingAudioUrl);
        }
        if n <= self.fail_first {
            return Err(GenerateError::RequestFailed {
                reason: format!("simulated outage (call {n})"),
            });
        }
        Ok(format!("https://clips.example.test/{n}.mp3"))
    }

    fn download_audio(&self, _audio_url: &str) -> Result<Vec<u8>, GenerateError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

fn settings_in(dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.source_dir = dir.join("audio");
    settings.dest_dir = dir.join("public");
    settings.backoff_base = Duration::ZERO;
    settings.ensure_dirs().unwrap();
    settings
}

#[test]
fn success_on_second_attempt_stops_retrying() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path());
    let client = FakeClient::new(1, b"audio bytes");
    let item = VocabItem::new("ขา", "kha-long-jatwa.mp3");

    let path = generate::generate_one(&client, &settings, &item, &Voice::default()).unwrap();

    assert_eq!(client.requests(), 2);
    assert_eq!(std::fs::read(&path).unwrap(), b"audio bytes");
}

#[test]
fn exhausts_after_exactly_three_attempts() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path());
    let client = FakeClient::new(usize::MAX, b"unused");
    let item = VocabItem::new("กา", "ka-samanj.mp3");

    let err = generate::generate_one(&client, &settings, &item, &Voice::default()).unwrap_err();

    assert_eq!(client.requests(), 3);
    match err {
        GenerateError::Exhausted { attempts, last } => {
            assert_eq!(attempts, 3);
            assert!(matches!(*last, GenerateError::RequestFailed { .. }));
        }
        other => panic!("expected Exhausted, got {other}"),
    }
}

#[test]
fn empty_download_is_reported_as_empty_write() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path());
    let client = FakeClient::new(0, b"");
    let item = VocabItem::new("จะ", "ja-ek.mp3");

    let err = generate::generate_one(&client, &settings, &item, &Voice::default()).unwrap_err();

    match err {
        GenerateError::Exhausted { last, .. } => {
            assert!(matches!(*last, GenerateError::EmptyWriteResult { .. }));
        }
        other => panic!("expected Exhausted, got {other}"),
    }
}

#[test]
fn batch_isolates_a_failing_item() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path());
    let mut client = FakeClient::new(0, b"0123456789");
    client.missing_url_for.push("ก่า".to_string());

    let vocab = vec![
        VocabItem::new("กา", "ka-samanj.mp3"),
        VocabItem::new("ก่า", "ka-ek.mp3"),
        VocabItem::new("ก้า", "ka-tho.mp3"),
    ];

    let report = generate::run_batch(&client, &settings, &vocab, &Voice::default());

    assert_eq!(report.generated, vec!["ka-samanj.mp3", "ka-tho.mp3"]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "ka-ek.mp3");
    assert_eq!(report.copied, vec!["ka-samanj.mp3", "ka-tho.mp3"]);
    assert_eq!(report.exit_code(), 2);

    for name in &report.copied {
        let published = settings.dest_dir.join(name);
        assert_eq!(std::fs::metadata(&published).unwrap().len(), 10);
    }
}

#[test]
fn clean_batch_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = settings_in(tmp.path());
    let client = FakeClient::new(0, b"ok");
    let vocab = vec![VocabItem::new("คา", "kha-low-samanj.mp3")];

    let report = generate::run_batch(&client, &settings, &vocab, &Voice::default());

    assert!(report.failed.is_empty());
    assert_eq!(report.exit_code(), 0);
}
