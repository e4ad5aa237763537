//! Headerless 32-bit PCM.
//!
//! Each sample is clamped to `[-1, 1]`, scaled by `i32::MAX`, truncated toward
//! zero and written as four native-endian bytes. There is no header; the
//! sample rate travels out of band.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tessera_core::SampleBuffer;

use crate::{Error, Result};

/// Size of one encoded sample.
pub const BYTES_PER_SAMPLE: usize = 4;

const FULL_SCALE: f64 = i32::MAX as f64;

/// Convert one sample to its PCM integer. NaN maps to 0.
///
/// ```rust
/// use tessera_io::sample_to_i32;
///
/// assert_eq!(sample_to_i32(1.0), i32::MAX);
/// assert_eq!(sample_to_i32(-4.0), -i32::MAX);
/// assert_eq!(sample_to_i32(f64::NAN), 0);
/// ```
#[inline]
pub fn sample_to_i32(sample: f64) -> i32 {
    if sample.is_nan() {
        return 0;
    }
    // `as` truncates toward zero
    (sample.clamp(-1.0, 1.0) * FULL_SCALE) as i32
}

/// Write every sample of `buffer` to `writer`.
///
/// Pass a buffered writer for files; this issues one small write per sample.
pub fn write_raw_pcm<W: Write>(buffer: &SampleBuffer, mut writer: W) -> Result<()> {
    for &sample in buffer.samples() {
        writer.write_all(&sample_to_i32(sample).to_ne_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `buffer` to it as raw PCM.
pub fn write_raw_pcm_file<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_raw_pcm(buffer, BufWriter::new(file))?;
    tracing::debug!(
        path = %path.display(),
        samples = buffer.len(),
        bytes = buffer.len() * BYTES_PER_SAMPLE,
        "wrote raw PCM"
    );
    Ok(())
}

/// Decode raw PCM from `reader` back to samples in `[-1, 1]`.
pub fn read_raw_pcm<R: Read>(mut reader: R) -> Result<Vec<f64>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        return Err(Error::TruncatedPcm { bytes: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|chunk| {
            let raw = i32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            f64::from(raw) / FULL_SCALE
        })
        .collect())
}

/// [`read_raw_pcm`] from a file.
pub fn read_raw_pcm_file<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    read_raw_pcm(BufReader::new(File::open(path)?))
}
