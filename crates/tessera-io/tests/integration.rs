//! Integration tests for tessera-io raw PCM and WAV output.

use tempfile::{NamedTempFile, tempdir};
use tessera_core::{Partial, SampleBuffer, apply_fade, synthesize};
use tessera_io::{Error, OutputFormat, read_raw_pcm_file, read_wav, write_raw_pcm_file, write_wav};

/// A faded two-partial segment, built without a random source.
fn render_small(sample_rate: u32) -> SampleBuffer {
    let mut buf = SampleBuffer::new(250, i64::from(sample_rate)).unwrap();
    synthesize(&mut buf, &[Partial::new(110.0, 0.5), Partial::new(440.0, 0.5)]);
    apply_fade(&mut buf, 0.25, 0.25);
    buf
}

// ---------------------------------------------------------------------------
// Raw PCM
// ---------------------------------------------------------------------------

#[test]
fn raw_file_has_four_bytes_per_sample() {
    let buffer = render_small(8000);
    let file = NamedTempFile::new().unwrap();
    write_raw_pcm_file(file.path(), &buffer).unwrap();

    let len = std::fs::metadata(file.path()).unwrap().len();
    assert_eq!(len, buffer.len() as u64 * 4);
}

#[test]
fn raw_file_roundtrip() {
    let buffer = render_small(44100);
    let file = NamedTempFile::new().unwrap();
    write_raw_pcm_file(file.path(), &buffer).unwrap();

    let decoded = read_raw_pcm_file(file.path()).unwrap();
    assert_eq!(decoded.len(), buffer.len());
    for (a, b) in buffer.samples().iter().zip(&decoded) {
        assert!((a - b).abs() < 1e-9, "{a} vs {b}");
    }
}

#[test]
fn raw_file_is_truncated_on_rewrite() {
    let file = NamedTempFile::new().unwrap();
    write_raw_pcm_file(file.path(), &render_small(44100)).unwrap();

    let short = SampleBuffer::with_len(3, 44100).unwrap();
    write_raw_pcm_file(file.path(), &short).unwrap();
    assert_eq!(std::fs::metadata(file.path()).unwrap().len(), 12);
}

#[test]
fn missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.pcm");
    let err = write_raw_pcm_file(&path, &render_small(8000)).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

// ---------------------------------------------------------------------------
// WAV
// ---------------------------------------------------------------------------

#[test]
fn wav_matches_raw_samples() {
    let buffer = render_small(16000);
    let dir = tempdir().unwrap();
    let raw = dir.path().join("out.pcm");
    let wav = dir.path().join("out.wav");

    write_raw_pcm_file(&raw, &buffer).unwrap();
    write_wav(&wav, &buffer).unwrap();

    let from_raw = read_raw_pcm_file(&raw).unwrap();
    let from_wav = read_wav(&wav).unwrap();
    assert_eq!(from_wav.sample_rate(), 16000);
    assert_eq!(from_wav.samples(), from_raw.as_slice());
}

#[test]
fn output_format_dispatch() {
    let buffer = render_small(8000);
    let dir = tempdir().unwrap();

    for format in [OutputFormat::Raw, OutputFormat::Wav] {
        let path = dir.path().join(format!("out.{format}"));
        format.write(&path, &buffer).unwrap();
        assert_eq!(OutputFormat::from_path(&path), format);
    }

    let loaded = read_wav(dir.path().join("out.wav")).unwrap();
    assert_eq!(loaded.len(), buffer.len());
}

#[test]
fn reading_garbage_as_wav_fails() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"definitely not a RIFF header").unwrap();
    assert!(matches!(read_wav(file.path()), Err(Error::Wav(_))));
}
