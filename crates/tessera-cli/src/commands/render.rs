//! Texture rendering command.

use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;
use tessera_config::{Method, RenderConfig};
use tessera_io::OutputFormat;

/// Sine methods for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliMethod {
    /// Recursive resonator
    Recursive,
    /// Per-sample sin()
    Direct,
}

impl From<CliMethod> for Method {
    fn from(m: CliMethod) -> Self {
        match m {
            CliMethod::Recursive => Method::Recursive,
            CliMethod::Direct => Method::Direct,
        }
    }
}

/// Output formats for CLI
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliFormat {
    /// Headerless 32-bit native-endian PCM
    Raw,
    /// Mono 32-bit WAV
    Wav,
}

impl From<CliFormat> for OutputFormat {
    fn from(f: CliFormat) -> Self {
        match f {
            CliFormat::Raw => OutputFormat::Raw,
            CliFormat::Wav => OutputFormat::Wav,
        }
    }
}

/// Render settings; a repeated flag takes its last value.
#[derive(Args)]
#[command(args_override_self = true)]
pub struct RenderArgs {
    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Load settings from a TOML file; flags below override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of segments
    #[arg(long)]
    segments: Option<usize>,

    /// Sine partials per segment
    #[arg(long)]
    partials: Option<usize>,

    /// Segment length in milliseconds
    #[arg(long, allow_negative_numbers = true)]
    segment_ms: Option<i64>,

    /// Sample rate in Hz
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Lowest partial frequency in Hz
    #[arg(long)]
    min_freq: Option<f64>,

    /// Highest partial frequency in Hz
    #[arg(long)]
    max_freq: Option<f64>,

    /// Harmonic lattice base in Hz
    #[arg(long)]
    base_freq: Option<f64>,

    /// Fade-in as a fraction of each segment (0-1)
    #[arg(long)]
    fade_in: Option<f64>,

    /// Fade-out as a fraction of each segment (0-1)
    #[arg(long)]
    fade_out: Option<f64>,

    /// Sine generation method
    #[arg(long, value_enum)]
    method: Option<CliMethod>,

    /// Output format (default: from the file extension, raw unless .wav)
    #[arg(long, value_enum)]
    format: Option<CliFormat>,
}

impl RenderArgs {
    fn apply(&self, config: &mut RenderConfig) {
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(v) = self.segments {
            config.segment_count = v;
        }
        if let Some(v) = self.partials {
            config.partials = v;
        }
        if let Some(v) = self.segment_ms {
            config.segment_millis = v;
        }
        if let Some(v) = self.sample_rate {
            config.sample_rate = v;
        }
        if let Some(v) = self.min_freq {
            config.min_freq = v;
        }
        if let Some(v) = self.max_freq {
            config.max_freq = v;
        }
        if let Some(v) = self.base_freq {
            config.base_freq = v;
        }
        if let Some(v) = self.fade_in {
            config.fade_in = v;
        }
        if let Some(v) = self.fade_out {
            config.fade_out = v;
        }
        if let Some(v) = self.method {
            config.method = v.into();
        }
    }
}

/// Run the render command.
pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;

    let format = args
        .format
        .map_or_else(|| OutputFormat::from_path(&args.output), OutputFormat::from);
    let composition = config.composition();

    tracing::info!(
        seed = config.seed,
        segments = config.segment_count,
        partials = config.partials,
        segment_ms = config.segment_millis,
        sample_rate = config.sample_rate,
        method = ?config.method,
        "rendering"
    );

    let started = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let buffer = composition.render(&mut rng)?;
    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis(),
        "render finished"
    );

    format.write(&args.output, &buffer)?;

    println!(
        "Wrote {} samples ({:.3}s, peak {:.4}) to {} [{}]",
        buffer.len(),
        buffer.duration_secs(),
        buffer.peak(),
        args.output.display(),
        format
    );

    Ok(())
}
