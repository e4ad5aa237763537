//! Output layer for tessera renders.
//!
//! This crate provides:
//!
//! - **Raw PCM**: [`write_raw_pcm`] / [`read_raw_pcm`] for headerless 32-bit
//!   signed native-endian mono samples, the engine's native output
//! - **WAV files**: [`write_wav`] / [`read_wav`] wrapping the same samples in a
//!   mono WAV container
//! - **Format selection**: [`OutputFormat`] dispatches to either writer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tessera_core::Composition;
//! use tessera_io::OutputFormat;
//!
//! let buffer = Composition::default().render(&mut rng)?;
//! OutputFormat::Raw.write("out.pcm", &buffer)?;
//! ```

mod format;
mod pcm;
mod wav;

pub use format::OutputFormat;
pub use pcm::{
    BYTES_PER_SAMPLE, read_raw_pcm, read_raw_pcm_file, sample_to_i32, write_raw_pcm,
    write_raw_pcm_file,
};
pub use wav::{read_wav, write_wav};

/// Error types for output operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Raw PCM input whose byte length is not a whole number of samples.
    #[error("truncated PCM data: {bytes} bytes is not a multiple of {BYTES_PER_SAMPLE}")]
    TruncatedPcm {
        /// Total bytes read.
        bytes: usize,
    },

    /// A decoded file could not be placed in a sample buffer.
    #[error("buffer error: {0}")]
    Buffer(#[from] tessera_core::BufferError),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for output operations.
pub type Result<T> = std::result::Result<T, Error>;
