//! Render configuration file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tessera_core::{Composition, SampleBuffer, SineMethod};

use crate::error::ConfigError;

/// Sine generation method, as spelled in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Recursive resonator.
    #[default]
    Recursive,
    /// Per-sample `sin`.
    Direct,
}

impl From<Method> for SineMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Recursive => SineMethod::Recursive,
            Method::Direct => SineMethod::Direct,
        }
    }
}

/// Everything needed to reproduce one render.
///
/// Every field has a default, so a file only needs the values it changes.
/// Unknown keys are rejected.
///
/// # TOML Format
///
/// ```toml
/// sample_rate = 44100
/// segment_millis = 2000
/// segment_count = 8
/// partials = 16
/// min_freq = 55.0
/// max_freq = 2000.0
/// base_freq = 55.0
/// fade_in = 0.5
/// fade_out = 0.5
/// method = "recursive"
/// seed = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Segment length in milliseconds.
    pub segment_millis: i64,
    /// Number of overlapping segments.
    pub segment_count: usize,
    /// Sine partials per segment.
    pub partials: usize,
    /// Lowest drawn frequency, Hz.
    pub min_freq: f64,
    /// Highest drawn frequency, Hz.
    pub max_freq: f64,
    /// Harmonic lattice base, Hz.
    pub base_freq: f64,
    /// Fade-in as a fraction of each segment.
    pub fade_in: f64,
    /// Fade-out as a fraction of each segment.
    pub fade_out: f64,
    /// Sine generation method.
    pub method: Method,
    /// Random seed.
    pub seed: u64,
}

/// Seed of the reference render.
pub const DEFAULT_SEED: u64 = 5;

impl Default for RenderConfig {
    fn default() -> Self {
        let c = Composition::default();
        Self {
            sample_rate: c.sample_rate,
            segment_millis: c.segment_millis,
            segment_count: c.segment_count,
            partials: c.partials_per_segment,
            min_freq: c.min_freq,
            max_freq: c.max_freq,
            base_freq: c.base_freq,
            fade_in: c.fade_in,
            fade_out: c.fade_out,
            method: Method::default(),
            seed: DEFAULT_SEED,
        }
    }
}

impl RenderConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Nyquist frequency for this sample rate.
    pub fn nyquist(&self) -> f64 {
        f64::from(self.sample_rate) / 2.0
    }

    /// Check that every field is usable, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::invalid("sample_rate", "must be positive"));
        }
        if self.segment_millis < 0 {
            return Err(ConfigError::invalid(
                "segment_millis",
                format!("must not be negative, got {}", self.segment_millis),
            ));
        }
        if SampleBuffer::len_for(self.segment_millis, i64::from(self.sample_rate)).is_err() {
            return Err(ConfigError::invalid(
                "segment_millis",
                format!("{} ms does not fit in memory", self.segment_millis),
            ));
        }
        if self.segment_count == 0 {
            return Err(ConfigError::invalid("segment_count", "must be at least 1"));
        }
        if self.composition().output_len().is_err() {
            return Err(ConfigError::invalid(
                "segment_count",
                format!("{} segments do not fit in memory", self.segment_count),
            ));
        }
        if self.partials == 0 {
            return Err(ConfigError::invalid("partials", "must be at least 1"));
        }
        if self.min_freq.is_nan() || self.min_freq < 0.0 {
            return Err(ConfigError::invalid(
                "min_freq",
                format!("must be non-negative, got {}", self.min_freq),
            ));
        }
        if self.max_freq.is_nan() || self.max_freq < self.min_freq {
            return Err(ConfigError::invalid(
                "max_freq",
                format!(
                    "must not be below min_freq ({} < {})",
                    self.max_freq, self.min_freq
                ),
            ));
        }
        if self.max_freq >= self.nyquist() {
            return Err(ConfigError::invalid(
                "max_freq",
                format!(
                    "must be below Nyquist ({} Hz), got {}",
                    self.nyquist(),
                    self.max_freq
                ),
            ));
        }
        if self.base_freq.is_nan() || self.base_freq <= 0.0 || self.base_freq.is_infinite() {
            return Err(ConfigError::invalid(
                "base_freq",
                format!("must be positive, got {}", self.base_freq),
            ));
        }
        for (field, value) in [("fade_in", self.fade_in), ("fade_out", self.fade_out)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be within [0, 1], got {value}"),
                ));
            }
        }
        Ok(())
    }

    /// The render parameters, without the seed.
    pub fn composition(&self) -> Composition {
        Composition {
            sample_rate: self.sample_rate,
            segment_millis: self.segment_millis,
            segment_count: self.segment_count,
            partials_per_segment: self.partials,
            min_freq: self.min_freq,
            max_freq: self.max_freq,
            base_freq: self.base_freq,
            fade_in: self.fade_in,
            fade_out: self.fade_out,
            method: self.method.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_field(config: &RenderConfig) -> &'static str {
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_default_is_reference_render() {
        let config = RenderConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.segment_millis, 2000);
        assert_eq!(config.segment_count, 8);
        assert_eq!(config.partials, 16);
        assert_eq!(config.base_freq, 55.0);
        assert_eq!(config.seed, 5);
        assert_eq!(config.method, Method::Recursive);
        config.validate().unwrap();
    }

    #[test]
    fn test_composition_mirrors_fields() {
        let config = RenderConfig {
            partials: 3,
            method: Method::Direct,
            ..RenderConfig::default()
        };
        let comp = config.composition();
        assert_eq!(comp.partials_per_segment, 3);
        assert_eq!(comp.method, SineMethod::Direct);
        assert_eq!(comp.sample_rate, config.sample_rate);
    }

    #[test]
    fn test_partial_toml() {
        let config = RenderConfig::from_toml("seed = 42\nmethod = \"direct\"\n").unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.method, Method::Direct);
        assert_eq!(config.segment_count, 8);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            RenderConfig::from_toml("").unwrap(),
            RenderConfig::default()
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RenderConfig::from_toml("segments = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_bad_method_rejected() {
        assert!(RenderConfig::from_toml("method = \"wavetable\"\n").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let original = RenderConfig {
            sample_rate: 48000,
            max_freq: 12000.0,
            fade_in: 0.25,
            seed: 99,
            ..RenderConfig::default()
        };
        let toml = original.to_toml().unwrap();
        assert!(toml.contains("sample_rate = 48000"));
        assert!(toml.contains("method = \"recursive\""));
        assert_eq!(RenderConfig::from_toml(&toml).unwrap(), original);
    }

    #[test]
    fn test_validation_rejects() {
        let base = RenderConfig::default();
        let cases = [
            (
                RenderConfig {
                    sample_rate: 0,
                    ..base.clone()
                },
                "sample_rate",
            ),
            (
                RenderConfig {
                    segment_millis: -1,
                    ..base.clone()
                },
                "segment_millis",
            ),
            (
                RenderConfig {
                    segment_count: 0,
                    ..base.clone()
                },
                "segment_count",
            ),
            (
                RenderConfig {
                    partials: 0,
                    ..base.clone()
                },
                "partials",
            ),
            (
                RenderConfig {
                    min_freq: -1.0,
                    ..base.clone()
                },
                "min_freq",
            ),
            (
                RenderConfig {
                    min_freq: f64::NAN,
                    ..base.clone()
                },
                "min_freq",
            ),
            (
                RenderConfig {
                    min_freq: 500.0,
                    max_freq: 400.0,
                    ..base.clone()
                },
                "max_freq",
            ),
            (
                RenderConfig {
                    max_freq: 22050.0,
                    ..base.clone()
                },
                "max_freq",
            ),
            (
                RenderConfig {
                    base_freq: 0.0,
                    ..base.clone()
                },
                "base_freq",
            ),
            (
                RenderConfig {
                    fade_in: 1.5,
                    ..base.clone()
                },
                "fade_in",
            ),
            (
                RenderConfig {
                    fade_out: f64::NAN,
                    ..base.clone()
                },
                "fade_out",
            ),
        ];
        for (config, field) in cases {
            assert_eq!(invalid_field(&config), field, "{config:?}");
        }
    }

    #[test]
    fn test_validation_accepts_edges() {
        RenderConfig {
            segment_millis: 0,
            min_freq: 0.0,
            max_freq: 22049.0,
            fade_in: 0.0,
            fade_out: 1.0,
            ..RenderConfig::default()
        }
        .validate()
        .unwrap();
    }
}
