//! Output format selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tessera_core::SampleBuffer;

use crate::Result;

/// Container for a rendered buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Headerless 32-bit native-endian PCM.
    #[default]
    Raw,
    /// Mono 32-bit integer WAV.
    Wav,
}

impl OutputFormat {
    /// Guess the format from a file extension: `.wav` is [`OutputFormat::Wav`],
    /// anything else is raw.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("wav") => Self::Wav,
            _ => Self::Raw,
        }
    }

    /// Write `buffer` to `path` in this format.
    pub fn write<P: AsRef<Path>>(self, path: P, buffer: &SampleBuffer) -> Result<()> {
        match self {
            Self::Raw => crate::write_raw_pcm_file(path, buffer),
            Self::Wav => crate::write_wav(path, buffer),
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Wav => "wav",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" | "pcm" => Ok(Self::Raw),
            "wav" => Ok(Self::Wav),
            other => Err(format!("unknown output format '{other}' (expected raw or wav)")),
        }
    }
}
