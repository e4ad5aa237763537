//! WAV file reading and writing.

use crate::Result;
use crate::pcm::sample_to_i32;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;
use tessera_core::SampleBuffer;

fn mono_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Int,
    }
}

/// Write `buffer` as a mono 32-bit integer WAV file.
///
/// Samples are encoded exactly as in the raw PCM output.
///
/// # Example
/// ```ignore
/// let buffer = SampleBuffer::new(1000, 44100)?; // 1 second of silence
/// write_wav("output.wav", &buffer)?;
/// ```
pub fn write_wav<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let path = path.as_ref();
    let mut writer = WavWriter::create(path, mono_spec(buffer.sample_rate()))?;
    for &sample in buffer.samples() {
        writer.write_sample(sample_to_i32(sample))?;
    }
    writer.finalize()?;

    tracing::debug!(
        path = %path.display(),
        samples = buffer.len(),
        sample_rate = buffer.sample_rate(),
        "wrote WAV"
    );
    Ok(())
}

/// Read a WAV file into a [`SampleBuffer`] at the file's sample rate.
///
/// Integer samples are scaled by the largest positive value of their bit
/// depth, so files from [`write_wav`] decode back to their original range.
/// Multi-channel files are mixed down to mono by averaging channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let samples: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = ((1i64 << spec.bits_per_sample.saturating_sub(1)) - 1) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mut buffer = SampleBuffer::with_len(samples.len() / channels, spec.sample_rate)?;
    for (dst, frame) in buffer.samples_mut().iter_mut().zip(samples.chunks(channels)) {
        *dst = frame.iter().sum::<f64>() / channels as f64;
    }
    Ok(buffer)
}
