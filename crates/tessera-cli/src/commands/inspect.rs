//! Summarize a rendered file.

use clap::Args;
use std::path::PathBuf;
use tessera_io::{OutputFormat, read_raw_pcm_file, read_wav};

/// Display a rendered file's length, duration and peak.
#[derive(Args)]
pub struct InspectArgs {
    /// Path to a raw PCM or WAV file
    pub file: PathBuf,

    /// Sample rate of raw PCM input (WAV files carry their own)
    #[arg(long, default_value = "44100")]
    pub sample_rate: u32,
}

/// Run the inspect command.
pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    if args.sample_rate == 0 {
        anyhow::bail!("--sample-rate must be positive");
    }

    let format = OutputFormat::from_path(&args.file);
    let (samples, sample_rate) = match format {
        OutputFormat::Wav => {
            let buffer = read_wav(&args.file)?;
            let rate = buffer.sample_rate();
            (buffer.samples().to_vec(), rate)
        }
        OutputFormat::Raw => (read_raw_pcm_file(&args.file)?, args.sample_rate),
    };

    let peak = samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
    let rms = if samples.is_empty() {
        0.0
    } else {
        (samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64).sqrt()
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {format}");
    println!("Sample Rate: {sample_rate} Hz");
    println!(
        "Duration:    {:.3}s ({} samples)",
        samples.len() as f64 / f64::from(sample_rate),
        samples.len()
    );
    println!("Peak:        {peak:.4}");
    println!("RMS:         {rms:.4}");

    let file_size = std::fs::metadata(&args.file)?.len();
    println!("File Size:   {}", format_bytes(file_size));

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
